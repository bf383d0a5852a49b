//! Audio format descriptors understood by the synthesizer
//!
//! A descriptor reads `[BE|LE](F|I|UI)(8|16|24|32|64)@<rate>`, for example
//! `LEI24@44100` or `F32@22050`. The alias `asterisk` stands for telephony
//! audio, `LEI16@8000`.
//!
//! Only a valid *prefix* is required: `LEI16@8000garbage` is accepted and
//! handed to the synthesizer verbatim. Tightening this would reject
//! descriptors that existing clients send today.

use std::{borrow::Cow, fmt};

use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Alias accepted in place of a descriptor
pub const ASTERISK: &str = "asterisk";

/// Byte order of multi-byte samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum Endianness {
    #[strum(serialize = "BE")]
    Big,
    #[strum(serialize = "LE")]
    Little,
}

/// How each sample is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum SampleEncoding {
    #[strum(serialize = "F")]
    Float,
    #[strum(serialize = "I")]
    SignedInteger,
    #[strum(serialize = "UI")]
    UnsignedInteger,
}

/// Bits per sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum SampleWidth {
    #[strum(serialize = "8")]
    W8,
    #[strum(serialize = "16")]
    W16,
    #[strum(serialize = "24")]
    W24,
    #[strum(serialize = "32")]
    W32,
    #[strum(serialize = "64")]
    W64,
}

impl SampleWidth {
    /// Width in bits
    pub const fn bits(self) -> u8 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W24 => 24,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }
}

/// Fully specified PCM layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// `None` leaves the byte order to the synthesizer
    pub endianness: Option<Endianness>,
    pub encoding: SampleEncoding,
    pub width: SampleWidth,
    pub sample_rate: u32,
}

impl fmt::Display for PcmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(endianness) = self.endianness {
            write!(f, "{endianness}")?;
        }
        write!(f, "{}{}@{}", self.encoding, self.width, self.sample_rate)
    }
}

/// A parsed format descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// The `asterisk` alias
    Asterisk,
    Pcm(PcmFormat),
}

impl AudioFormat {
    /// What the `asterisk` alias stands for
    pub const ASTERISK_PCM: PcmFormat = PcmFormat {
        endianness: Some(Endianness::Little),
        encoding: SampleEncoding::SignedInteger,
        width: SampleWidth::W16,
        sample_rate: 8000,
    };

    /// Parse a descriptor, ignoring anything after a valid prefix
    pub fn parse(spec: &str) -> Option<Self> {
        if spec == ASTERISK {
            return Some(Self::Asterisk);
        }

        let (endianness, rest) = match take_token::<Endianness>(spec) {
            Some((endianness, rest)) => (Some(endianness), rest),
            None => (None, spec),
        };
        let (encoding, rest) = take_token::<SampleEncoding>(rest)?;
        let (width, rest) = take_token::<SampleWidth>(rest)?;
        let rest = rest.strip_prefix('@')?;
        let sample_rate = take_rate(rest)?;

        Some(Self::Pcm(PcmFormat {
            endianness,
            encoding,
            width,
            sample_rate,
        }))
    }

    /// The concrete layout, with the alias resolved
    pub const fn pcm(self) -> PcmFormat {
        match self {
            Self::Asterisk => Self::ASTERISK_PCM,
            Self::Pcm(pcm) => pcm,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asterisk => f.write_str(ASTERISK),
            Self::Pcm(pcm) => fmt::Display::fmt(pcm, f),
        }
    }
}

/// Whether `spec` is an acceptable format descriptor
pub fn validate(spec: &str) -> bool {
    AudioFormat::parse(spec).is_some()
}

/// The `--data-format` value handed to the synthesizer
///
/// The alias is expanded; every other descriptor passes through verbatim,
/// including any trailing characters the validator ignored.
pub fn resolve_data_format(spec: &str) -> Cow<'_, str> {
    if spec == ASTERISK {
        Cow::Owned(AudioFormat::ASTERISK_PCM.to_string())
    } else {
        Cow::Borrowed(spec)
    }
}

fn take_token<T>(input: &str) -> Option<(T, &str)>
where
    T: IntoEnumIterator + Into<&'static str> + Copy,
{
    T::iter().find_map(|token| input.strip_prefix(token.into()).map(|rest| (token, rest)))
}

/// Leading decimal digits as a sample rate
///
/// Digits that would overflow `u32` are left in the ignored remainder.
fn take_rate(input: &str) -> Option<u32> {
    let mut digits = input.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;

    let mut rate: u32 = 0;
    for digit in digits {
        match rate.checked_mul(10).and_then(|r| r.checked_add(u32::from(digit - b'0'))) {
            Some(next) => rate = next,
            None => break,
        }
    }

    Some(rate)
}
