//! Simulated archive extraction. Real decompression is an external
//! collaborator; this module fabricates a deterministic Gerber/drill file
//! set keyed off the archive's base name so the rest of the pipeline has
//! something to chew on.

use serde::{Deserialize, Serialize};

use crate::classify::{classify, FileCategory};

/// One entry of an extracted archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFile {
    pub name: String,
    pub path: String,
    pub size: usize,
    pub content: Vec<u8>,
    pub is_directory: bool,
    pub file_type: FileCategory,
}

impl ExtractedFile {
    fn regular(name: String, content: String) -> Self {
        let file_type = classify(&name);
        let content = content.into_bytes();
        Self {
            path: name.clone(),
            size: content.len(),
            name,
            content,
            is_directory: false,
            file_type,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("unsupported archive format: {0}")]
    UnsupportedArchive(String),
    #[error("archive is empty")]
    EmptyArchive,
}

const ARCHIVE_EXTENSIONS: [&str; 2] = ["rar", "zip"];

/// Extract an archive into a simulated Gerber file set. A single
/// outstanding request with no cancellation; duplicate requests are not
/// deduplicated and each produces independent output.
pub async fn extract(archive: &[u8], name: &str) -> Result<Vec<ExtractedFile>, ExtractError> {
    if archive.is_empty() {
        return Err(ExtractError::EmptyArchive);
    }
    let (base, extension) = match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, ext.to_ascii_lowercase()),
        _ => return Err(ExtractError::UnsupportedArchive(name.to_string())),
    };
    if !ARCHIVE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ExtractError::UnsupportedArchive(name.to_string()));
    }

    log::info!("Extracting '{}' ({} bytes)", name, archive.len());

    let files = vec![
        ExtractedFile::regular(format!("{base}.GTL"), gerber_layer_content("TOP")),
        ExtractedFile::regular(format!("{base}.GBL"), gerber_layer_content("BOTTOM")),
        ExtractedFile::regular(format!("{base}.DRL"), drill_content()),
        ExtractedFile::regular(format!("{base}.GKO"), outline_content()),
        ExtractedFile::regular(
            format!("{base}_info.txt"),
            format!("Board: {base}\nLayers: 2\nThickness: 1.6mm\nDimensions: 100mm x 80mm"),
        ),
    ];

    log::info!("Extracted {} files from '{}'", files.len(), name);
    Ok(files)
}

fn gerber_layer_content(layer: &str) -> String {
    format!(
        "G04 {layer} Layer Gerber File*\n\
         G04 Generated by PCB Demo Creator*\n\
         %FSLAX46Y46*%\n\
         %MOMM*%\n\
         %AMCircle*\n\
         21,1,$1,0,0,0*\n\
         %\n\
         G01*\n\
         %ADD10C,1.6*%\n\
         %ADD11C,1.0*%\n\
         %ADD12R,1.8X1.8*%\n\
         D10*\n\
         X25400Y25400D03*\n\
         X152400Y25400D03*\n\
         X152400Y152400D03*\n\
         X25400Y152400D03*\n\
         D11*\n\
         X50800Y50800D03*\n\
         X76200Y50800D03*\n\
         X101600Y50800D03*\n\
         X127000Y50800D03*\n\
         X50800Y76200D03*\n\
         X76200Y76200D03*\n\
         X101600Y76200D03*\n\
         X127000Y76200D03*\n\
         D12*\n\
         X50800Y101600D03*\n\
         X50800Y127000D03*\n\
         X127000Y101600D03*\n\
         X127000Y127000D03*\n\
         M02*"
    )
}

fn drill_content() -> String {
    "M48\n\
     ;DRILL file {KiCad (6.0.0-0)} date Friday, 19 April 2024 at 12:15:09\n\
     ;FORMAT={-:-/ absolute / metric / decimal}\n\
     FMAT,2\n\
     METRIC,TZ\n\
     ; #@! TF.CreationDate,2024-04-19T12:15:09+01:00\n\
     ; #@! TF.GenerationSoftware,Kicad,Pcbnew,(6.0.0-0)\n\
     ; #@! TF.FileFunction,MixedPlating,1,2\n\
     FMAT,2\n\
     METRIC\n\
     ; #@! TA.AperFunction,Plated,PTH,ComponentDrill\n\
     T1C1.000\n\
     ; #@! TA.AperFunction,Plated,PTH,ComponentDrill\n\
     T2C3.200\n\
     %\n\
     G90\n\
     G05\n\
     T1\n\
     X50.8Y50.8\n\
     X50.8Y76.2\n\
     X50.8Y101.6\n\
     X50.8Y127.0\n\
     X76.2Y50.8\n\
     X76.2Y76.2\n\
     X101.6Y50.8\n\
     X101.6Y76.2\n\
     X127.0Y50.8\n\
     X127.0Y76.2\n\
     X127.0Y101.6\n\
     X127.0Y127.0\n\
     T2\n\
     X25.4Y25.4\n\
     X25.4Y152.4\n\
     X152.4Y25.4\n\
     X152.4Y152.4\n\
     T0\n\
     M30"
        .to_string()
}

fn outline_content() -> String {
    "G04 Board Outline*\n\
     G04 Generated by PCB Demo Creator*\n\
     %FSLAX46Y46*%\n\
     %MOMM*%\n\
     G01*\n\
     %ADD10C,0.1*%\n\
     D10*\n\
     X0Y0D02*\n\
     X177800Y0D01*\n\
     X177800Y177800D01*\n\
     X0Y177800D01*\n\
     X0Y0D01*\n\
     M02*"
        .to_string()
}
