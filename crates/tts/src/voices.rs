use std::collections::BTreeSet;

/// Voices the synthesizer reported at startup
///
/// Names are stored lower-cased; iteration is in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceSet {
    names: BTreeSet<String>,
}

impl VoiceSet {
    /// Parse the synthesizer's voice listing
    ///
    /// Each non-blank line contributes its first whitespace-delimited
    /// token, so `Alex    en_US    # Most people recognize me` yields `alex`.
    pub fn from_listing(output: &str) -> Self {
        let names = output
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_lowercase)
            .collect();

        Self { names }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, voice: &str) -> bool {
        self.names.contains(&voice.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// One name per line, each terminated by `\n`
    pub fn to_listing(&self) -> String {
        self.iter().fold(String::new(), |mut out, name| {
            out.push_str(name);
            out.push('\n');
            out
        })
    }
}

impl<S: AsRef<str>> FromIterator<S> for VoiceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|name| name.as_ref().to_lowercase()).collect(),
        }
    }
}
