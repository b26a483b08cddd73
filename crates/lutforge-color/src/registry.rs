//! The closed registry of supported camera log formats.
//!
//! Each format ties a log curve (encode/decode) to its native gamut
//! primaries. The registry is a plain enum: every supported format is
//! enumerable at compile time, lookup is case-insensitive over the
//! canonical names, and an unrecognized name is an error rather than a
//! silent fallback.

use crate::{ColorError, ColorResult};
use lutforge_math::{BRADFORD, CAT02, Mat3, VON_KRIES, XYZ_SCALING};
use lutforge_primaries::{
    ARRI_WIDE_GAMUT_3, ARRI_WIDE_GAMUT_4, CINEMA_GAMUT, DAVINCI_WIDE_GAMUT, F_GAMUT, F_GAMUT_C,
    N_GAMUT, Primaries, REC2020, RED_WIDE_GAMUT, S_GAMUT3, S_GAMUT3_CINE, V_GAMUT,
};
use lutforge_transfer::{
    canon_log, davinci_intermediate, f_log, f_log2, l_log, log3g10, log_c, log_c4, n_log, s_log3,
    v_log,
};
use std::fmt;
use std::str::FromStr;

/// A supported camera log format: a log curve plus its native gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogFormat {
    /// Sony S-Log3 / S-Gamut3
    SLog3,
    /// Sony S-Log3 / S-Gamut3.Cine
    SLog3Cine,
    /// Fujifilm F-Log / F-Gamut
    FLog,
    /// Fujifilm F-Log2 / F-Gamut
    FLog2,
    /// Fujifilm F-Log2 C / F-Gamut C
    FLog2C,
    /// Canon Log 2 / Cinema Gamut
    CLog2,
    /// Canon Log 3 / Cinema Gamut
    CLog3,
    /// ARRI LogC3 / ARRI Wide Gamut 3
    LogC3,
    /// ARRI LogC4 / ARRI Wide Gamut 4
    LogC4,
    /// Panasonic V-Log / V-Gamut
    VLog,
    /// Nikon N-Log / N-Gamut
    NLog,
    /// Leica L-Log / Rec.2020
    LLog,
    /// DaVinci Intermediate / DaVinci Wide Gamut
    DaVinciIntermediate,
    /// RED Log3G10 / RED Wide Gamut RGB
    Log3G10,
}

impl LogFormat {
    /// Every registry entry, in presentation order.
    pub const ALL: [LogFormat; 14] = [
        LogFormat::SLog3,
        LogFormat::SLog3Cine,
        LogFormat::FLog,
        LogFormat::FLog2,
        LogFormat::FLog2C,
        LogFormat::CLog2,
        LogFormat::CLog3,
        LogFormat::LogC3,
        LogFormat::LogC4,
        LogFormat::VLog,
        LogFormat::NLog,
        LogFormat::LLog,
        LogFormat::DaVinciIntermediate,
        LogFormat::Log3G10,
    ];

    /// Canonical name, as accepted by [`LogFormat::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            LogFormat::SLog3 => "S-Log3",
            LogFormat::SLog3Cine => "S-Log3.Cine",
            LogFormat::FLog => "F-Log",
            LogFormat::FLog2 => "F-Log2",
            LogFormat::FLog2C => "F-Log2C",
            LogFormat::CLog2 => "C-Log2",
            LogFormat::CLog3 => "C-Log3",
            LogFormat::LogC3 => "LogC3",
            LogFormat::LogC4 => "LogC4",
            LogFormat::VLog => "V-Log",
            LogFormat::NLog => "N-Log",
            LogFormat::LLog => "L-Log",
            LogFormat::DaVinciIntermediate => "DaVinci Intermediate",
            LogFormat::Log3G10 => "Log3G10",
        }
    }

    /// Human-readable curve / gamut description.
    pub fn full_name(&self) -> &'static str {
        match self {
            LogFormat::SLog3 => "Sony S-Log3 / S-Gamut3",
            LogFormat::SLog3Cine => "Sony S-Log3 / S-Gamut3.Cine",
            LogFormat::FLog => "Fujifilm F-Log / F-Gamut",
            LogFormat::FLog2 => "Fujifilm F-Log2 / F-Gamut",
            LogFormat::FLog2C => "Fujifilm F-Log2 C / F-Gamut C",
            LogFormat::CLog2 => "Canon Log 2 / Cinema Gamut",
            LogFormat::CLog3 => "Canon Log 3 / Cinema Gamut",
            LogFormat::LogC3 => "ARRI LogC3 / ARRI Wide Gamut 3",
            LogFormat::LogC4 => "ARRI LogC4 / ARRI Wide Gamut 4",
            LogFormat::VLog => "Panasonic V-Log / V-Gamut",
            LogFormat::NLog => "Nikon N-Log / N-Gamut",
            LogFormat::LLog => "Leica L-Log / Rec.2020",
            LogFormat::DaVinciIntermediate => "DaVinci Intermediate / DaVinci Wide Gamut",
            LogFormat::Log3G10 => "RED Log3G10 / RED Wide Gamut RGB",
        }
    }

    /// Filename-safe form of the canonical name: spaces become underscores,
    /// dots are dropped.
    pub fn slug(&self) -> String {
        self.name().replace(' ', "_").replace('.', "")
    }

    /// The curve's decode function (log signal to scene-linear).
    pub fn decode_fn(&self) -> fn(f32) -> f32 {
        match self {
            LogFormat::SLog3 | LogFormat::SLog3Cine => s_log3::decode,
            LogFormat::FLog => f_log::decode,
            LogFormat::FLog2 | LogFormat::FLog2C => f_log2::decode,
            LogFormat::CLog2 => canon_log::clog2_decode,
            LogFormat::CLog3 => canon_log::clog3_decode,
            LogFormat::LogC3 => log_c::decode,
            LogFormat::LogC4 => log_c4::decode,
            LogFormat::VLog => v_log::decode,
            LogFormat::NLog => n_log::decode,
            LogFormat::LLog => l_log::decode,
            LogFormat::DaVinciIntermediate => davinci_intermediate::decode,
            LogFormat::Log3G10 => log3g10::decode,
        }
    }

    /// The curve's encode function (scene-linear to log signal).
    pub fn encode_fn(&self) -> fn(f32) -> f32 {
        match self {
            LogFormat::SLog3 | LogFormat::SLog3Cine => s_log3::encode,
            LogFormat::FLog => f_log::encode,
            LogFormat::FLog2 | LogFormat::FLog2C => f_log2::encode,
            LogFormat::CLog2 => canon_log::clog2_encode,
            LogFormat::CLog3 => canon_log::clog3_encode,
            LogFormat::LogC3 => log_c::encode,
            LogFormat::LogC4 => log_c4::encode,
            LogFormat::VLog => v_log::encode,
            LogFormat::NLog => n_log::encode,
            LogFormat::LLog => l_log::encode,
            LogFormat::DaVinciIntermediate => davinci_intermediate::encode,
            LogFormat::Log3G10 => log3g10::encode,
        }
    }

    /// The curve's native gamut primaries.
    pub fn primaries(&self) -> &'static Primaries {
        match self {
            LogFormat::SLog3 => &S_GAMUT3,
            LogFormat::SLog3Cine => &S_GAMUT3_CINE,
            LogFormat::FLog | LogFormat::FLog2 => &F_GAMUT,
            LogFormat::FLog2C => &F_GAMUT_C,
            LogFormat::CLog2 | LogFormat::CLog3 => &CINEMA_GAMUT,
            LogFormat::LogC3 => &ARRI_WIDE_GAMUT_3,
            LogFormat::LogC4 => &ARRI_WIDE_GAMUT_4,
            LogFormat::VLog => &V_GAMUT,
            LogFormat::NLog => &N_GAMUT,
            LogFormat::LLog => &REC2020,
            LogFormat::DaVinciIntermediate => &DAVINCI_WIDE_GAMUT,
            LogFormat::Log3G10 => &RED_WIDE_GAMUT,
        }
    }

    /// Case-insensitive lookup against the canonical names.
    ///
    /// Fails with [`ColorError::UnknownFormat`] for anything not in the
    /// registry; the error lists what is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutforge_color::LogFormat;
    ///
    /// assert_eq!(LogFormat::parse("s-log3.cine").unwrap(), LogFormat::SLog3Cine);
    /// assert!(LogFormat::parse("Rec709").is_err());
    /// ```
    pub fn parse(name: &str) -> ColorResult<LogFormat> {
        LogFormat::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::UnknownFormat {
                name: name.to_string(),
                available: LogFormat::ALL
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogFormat::parse(s)
    }
}

/// Chromatic adaptation method for gamut conversion.
///
/// Only consulted when the source and target white points differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdaptationMethod {
    /// CAT02 (CIECAM02). The default, matching common grading tools.
    #[default]
    Cat02,
    /// Bradford.
    Bradford,
    /// Von Kries (Hunt-Pointer-Estevez).
    VonKries,
    /// Plain diagonal scaling in XYZ.
    XyzScaling,
}

impl AdaptationMethod {
    /// The cone-response matrix backing this method.
    pub fn matrix(&self) -> Mat3 {
        match self {
            AdaptationMethod::Cat02 => CAT02,
            AdaptationMethod::Bradford => BRADFORD,
            AdaptationMethod::VonKries => VON_KRIES,
            AdaptationMethod::XyzScaling => XYZ_SCALING,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            AdaptationMethod::Cat02 => "CAT02",
            AdaptationMethod::Bradford => "Bradford",
            AdaptationMethod::VonKries => "Von Kries",
            AdaptationMethod::XyzScaling => "XYZ Scaling",
        }
    }
}

impl fmt::Display for AdaptationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdaptationMethod {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace([' ', '-', '_'], "").as_str() {
            "cat02" => Ok(AdaptationMethod::Cat02),
            "bradford" => Ok(AdaptationMethod::Bradford),
            "vonkries" => Ok(AdaptationMethod::VonKries),
            "xyzscaling" | "xyz" => Ok(AdaptationMethod::XyzScaling),
            _ => Err(ColorError::UnknownAdaptation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(LogFormat::parse("logc4").unwrap(), LogFormat::LogC4);
        assert_eq!(LogFormat::parse("LOGC4").unwrap(), LogFormat::LogC4);
        assert_eq!(LogFormat::parse("s-log3.cine").unwrap(), LogFormat::SLog3Cine);
        assert_eq!(
            LogFormat::parse("davinci intermediate").unwrap(),
            LogFormat::DaVinciIntermediate
        );
    }

    #[test]
    fn test_parse_unknown_lists_registry() {
        let err = LogFormat::parse("Rec709").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Rec709"));
        assert!(msg.contains("LogC4"));
        assert!(msg.contains("S-Log3.Cine"));
    }

    #[test]
    fn test_every_format_roundtrips_its_name() {
        for format in LogFormat::ALL {
            assert_eq!(LogFormat::parse(format.name()).unwrap(), format);
        }
    }

    #[test]
    fn test_slug_is_filename_safe() {
        assert_eq!(LogFormat::SLog3Cine.slug(), "S-Log3Cine");
        assert_eq!(LogFormat::DaVinciIntermediate.slug(), "DaVinci_Intermediate");
        for format in LogFormat::ALL {
            let slug = format.slug();
            assert!(!slug.contains(' ') && !slug.contains('.'), "{}", slug);
        }
    }

    #[test]
    fn test_curves_invert() {
        for format in LogFormat::ALL {
            let decode = format.decode_fn();
            let encode = format.encode_fn();
            let linear = decode(0.5);
            let back = encode(linear);
            assert!(
                (back - 0.5).abs() < 1e-3,
                "{}: 0.5 -> {} -> {}",
                format,
                linear,
                back
            );
        }
    }

    #[test]
    fn test_adaptation_parse() {
        assert_eq!("cat02".parse::<AdaptationMethod>().unwrap(), AdaptationMethod::Cat02);
        assert_eq!(
            "von kries".parse::<AdaptationMethod>().unwrap(),
            AdaptationMethod::VonKries
        );
        assert!("perceptual".parse::<AdaptationMethod>().is_err());
    }
}
