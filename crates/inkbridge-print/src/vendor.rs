// SPDX-License-Identifier: PMPL-1.0-or-later
//
// The WorkCentre web upload vocabulary.
//
// The printer's `UPLPRT.cmd` endpoint takes a multipart form whose field
// names and constant values are byte-exact requirements of the firmware.
// The three job-derived fields (CLR, DUP, SIZ) are produced by total
// mapping functions: every input maps to a non-empty code, with an
// explicit fallback arm, so an unmapped attribute can never propagate an
// absent value into the wire protocol.

use inkbridge_core::error::{InkbridgeError, Result};
use inkbridge_core::types::{ColorMode, DuplexMode, JobAttributes, PaperSize};
use reqwest::multipart::{Form, Part};

/// Path probed to decide printer reachability.
pub const PROBE_PATH: &str = "/print.htm";

/// Path of the job upload endpoint.
pub const UPLOAD_PATH: &str = "/UPLPRT.cmd";

/// Sentinel "no size" code for media the form does not recognize.
pub const NO_SIZE: &str = "NUL";

/// Filename declared for the document part.
pub const DOCUMENT_FILENAME: &str = "file.pdf";

/// Media type declared for the document part.
pub const DOCUMENT_MIME: &str = "application/pdf";

/// Security/print-id constants the firmware requires verbatim.
const SPID: &str = "************";
const RSPID: &str = "************";

/// Form code for the colour mode. Total; monochrome is the fallback.
pub fn color_code(mode: ColorMode) -> &'static str {
    match mode {
        ColorMode::Color => "CLR",
        ColorMode::Monochrome => "BW",
    }
}

/// Form code for the duplex mode. Total; simplex is the fallback.
pub fn duplex_code(mode: DuplexMode) -> &'static str {
    match mode {
        DuplexMode::ShortEdge => "TB",
        DuplexMode::LongEdge => "DP",
        DuplexMode::Simplex => "NO",
    }
}

/// Form code for the paper size. Total; unknown sizes fall back to the
/// [`NO_SIZE`] sentinel rather than an absent field.
pub fn size_code(size: PaperSize) -> &'static str {
    match size {
        PaperSize::A4 => "A4",
        PaperSize::A3 => "A3",
        PaperSize::A5 => "A5",
        PaperSize::B4 => "B4",
        PaperSize::B5 => "B5",
        PaperSize::Letter => "LT",
        PaperSize::Legal => "LG",
        PaperSize::Unknown => NO_SIZE,
    }
}

/// Build the complete `UPLPRT.cmd` multipart body for one job.
///
/// The constant fields encode fixed printer modes this bridge does not
/// expose: single copy, no collation, fixed operation/input/delivery
/// types, and no scheduled-print metadata.
pub fn upload_form(attrs: &JobAttributes, document: Vec<u8>) -> Result<Form> {
    let file = Part::bytes(document)
        .file_name(DOCUMENT_FILENAME)
        .mime_str(DOCUMENT_MIME)
        .map_err(|e| InkbridgeError::Upload(format!("document part: {e}")))?;

    Ok(Form::new()
        .text("ESPID", "off")
        .text("CPN", "1")
        .text("COLT", "NO")
        .text("OT", "CT2")
        .text("IT", "AUTO")
        .text("SIZ", size_code(attrs.media))
        .text("MED", NO_SIZE)
        .text("DEL", "IMP")
        .text("PPUSR", "")
        .text("HOUR", "")
        .text("MIN", "")
        .text("SPUSR", "")
        .text("SPID", SPID)
        .text("RSPID", RSPID)
        .text("CLR", color_code(attrs.color))
        .text("DUP", duplex_code(attrs.duplex))
        .part("FILE", file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_COLORS: [ColorMode; 2] = [ColorMode::Color, ColorMode::Monochrome];
    const ALL_DUPLEX: [DuplexMode; 3] = [
        DuplexMode::Simplex,
        DuplexMode::LongEdge,
        DuplexMode::ShortEdge,
    ];
    const ALL_SIZES: [PaperSize; 8] = [
        PaperSize::A4,
        PaperSize::A3,
        PaperSize::A5,
        PaperSize::B4,
        PaperSize::B5,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Unknown,
    ];

    #[test]
    fn every_color_mode_has_a_code() {
        for mode in ALL_COLORS {
            assert!(!color_code(mode).is_empty());
        }
    }

    #[test]
    fn every_duplex_mode_has_a_code() {
        for mode in ALL_DUPLEX {
            assert!(!duplex_code(mode).is_empty());
        }
    }

    #[test]
    fn every_paper_size_has_a_code() {
        for size in ALL_SIZES {
            assert!(!size_code(size).is_empty());
        }
    }

    #[test]
    fn default_attribute_codes() {
        let attrs = JobAttributes::default();
        assert_eq!(color_code(attrs.color), "BW");
        assert_eq!(duplex_code(attrs.duplex), "NO");
        assert_eq!(size_code(attrs.media), "A4");
    }

    #[test]
    fn unknown_size_falls_back_to_sentinel() {
        assert_eq!(size_code(PaperSize::Unknown), NO_SIZE);
    }

    #[test]
    fn upload_form_builds_for_default_attributes() {
        let form = upload_form(&JobAttributes::default(), b"%PDF-1.4".to_vec());
        assert!(form.is_ok());
    }
}
