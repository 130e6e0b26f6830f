//! Compiling a caller-supplied [`License`] template into a
//! [`CompiledLicense`] ready for matching.

use crate::license_detection::index::build_start_indexes;
use crate::license_detection::normalize::normalize;
use crate::license_detection::types::{CompiledLicense, License, LicenseType};

/// Normalize `license.text` and build its start-index.
///
/// Returns `None` if the template has no text at all — such a record only
/// contributes a URL-table entry (see [`crate::license_detection::Checker::new`]),
/// not a matchable license.
pub fn compile_license(license: &License) -> Option<CompiledLicense> {
    if license.text.is_empty() {
        return None;
    }
    let doc = normalize(license.text.as_bytes());
    let start_indexes = build_start_indexes(&doc.words);
    Some(CompiledLicense {
        name: license.name.clone(),
        license_type: LicenseType::from_name(&license.name),
        doc,
        start_indexes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license(name: &str, text: &str) -> License {
        License {
            name: name.to_string(),
            text: text.to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn compiles_type_and_index() {
        let compiled = compile_license(&license("MIT", "Permission is hereby granted")).unwrap();
        assert_eq!(compiled.name, "MIT");
        assert_eq!(compiled.license_type, LicenseType::Mit);
        assert_eq!(
            compiled.doc.words,
            vec!["permission", "is", "hereby", "granted"]
        );
        assert_eq!(compiled.start_indexes.get("hereby"), Some(&vec![2]));
    }

    #[test]
    fn empty_text_yields_none() {
        assert!(compile_license(&license("MIT", "")).is_none());
    }

    #[test]
    fn unrecognized_name_falls_back_to_other() {
        let compiled = compile_license(&license("EUPL-1.2", "some text")).unwrap();
        assert_eq!(compiled.license_type, LicenseType::Other);
    }
}
