//! Output-path policy.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Resolves the destination path for the result workbook.
///
/// An explicit path is used as given, with `.xlsx` appended when it has no
/// extension. Without an explicit path the destination is derived from the
/// input: `<stem>_<8-char unique suffix>.xlsx` next to the source, so the
/// default never silently overwrites the input.
pub fn resolve_output_path(input: &Path, requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(path) if path.extension().is_none() => path.with_extension("xlsx"),
        Some(path) => path.to_path_buf(),
        None => {
            let stem = input
                .file_stem()
                .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned());
            let suffix = &Uuid::new_v4().simple().to_string()[..8];
            input.with_file_name(format!("{stem}_{suffix}.xlsx"))
        }
    }
}
