//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization. The values
//! reproduce the historical `vr-modeling` documentation build.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [project] Section Defaults
// ============================================================================

pub mod project {
    use std::path::PathBuf;

    pub fn name() -> String {
        "vr-modeling".into()
    }

    pub fn manifest() -> PathBuf {
        "docs/_build/doxbridge.json".into()
    }
}

// ============================================================================
// [hosted] Section Defaults
// ============================================================================

pub mod hosted {
    pub fn env_var() -> String {
        "READTHEDOCS".into()
    }

    pub fn enable_value() -> String {
        "True".into()
    }
}

// ============================================================================
// [doxygen] Section Defaults
// ============================================================================

pub mod doxygen {
    use std::path::PathBuf;

    pub fn command() -> Vec<String> {
        vec!["doxygen".into()]
    }

    pub fn template() -> PathBuf {
        "docs/Doxyfile.in".into()
    }

    pub fn doxyfile() -> PathBuf {
        "docs/Doxyfile".into()
    }

    pub fn inputs() -> Vec<String> {
        vec![
            "Interface/source".into(),
            "Assets/Scripts".into(),
            "Interface/external/Unity".into(),
            "Interface/external/UnityNativeTool".into(),
        ]
    }

    pub fn output() -> String {
        "docs/doxygen".into()
    }

    pub fn xml_subdir() -> String {
        "xml".into()
    }

    /// Doxygen reads `a \ b` as a line continuation, i.e. a list of inputs.
    pub fn delimiter() -> String {
        " \\ ".into()
    }
}

// ============================================================================
// [xref] Section Defaults
// ============================================================================

pub mod xref {
    use crate::config::XrefGroup;
    use std::collections::BTreeMap;

    pub fn ignore() -> Vec<String> {
        vec!["Vector2".into(), "Vector3".into()]
    }

    pub fn rename() -> BTreeMap<String, String> {
        BTreeMap::from([("NativeArray".into(), "NativeArray_1".into())])
    }

    pub fn groups() -> BTreeMap<String, XrefGroup> {
        BTreeMap::from([
            (
                "unity".into(),
                group(
                    None,
                    &[
                        ("XR", &["InputDevice", "InputDeviceCharacteristics"][..]),
                        ("Unity.Collections", &["NativeArray"][..]),
                        (
                            "Experimental.AssetImporters",
                            &["AssetImportContext", "MeshImportPostprocessor", "ScriptedImporter"][..],
                        ),
                        ("Rendering", &["VertexAttributeDescriptor"][..]),
                        ("Events", &["UnityAction"][..]),
                    ],
                ),
            ),
            (
                "upm.xrit".into(),
                group(
                    Some((
                        "https://docs.unity3d.com/Packages/com.unity.xr.interaction.toolkit@0.9/api/%s.html",
                        "https://docs.unity3d.com/Packages/com.unity.xr.interaction.toolkit@0.9/?%s",
                    )),
                    &[(
                        "UnityEngine.XR.Interaction.Toolkit",
                        &["XRRayInteractor", "XRBaseInteractable", "XRController"][..],
                    )],
                ),
            ),
            (
                "upm.tmp".into(),
                group(
                    Some((
                        "https://docs.unity3d.com/Packages/com.unity.textmeshpro@1.2/api/%s.html",
                        "https://docs.unity3d.com/Packages/com.unity.textmeshpro@1.2/?%s",
                    )),
                    &[("TMPro", &["TMP_Text"][..])],
                ),
            ),
            (
                "upm.ugui".into(),
                group(
                    Some((
                        "https://docs.unity3d.com/Packages/com.unity.ugui@1.0/manual/script-%s.html",
                        "https://docs.unity3d.com/Packages/com.unity.ugui@1.0/manual/index.html?%s",
                    )),
                    &[("", &["Image", "Button", "Toggle"][..])],
                ),
            ),
        ])
    }

    fn group(pages: Option<(&str, &str)>, namespaces: &[(&str, &[&str])]) -> XrefGroup {
        XrefGroup {
            type_page: pages.map(|(type_page, _)| type_page.into()),
            search_page: pages.map(|(_, search_page)| search_page.into()),
            namespaces: namespaces
                .iter()
                .map(|(ns, aliases)| {
                    (ns.to_string(), aliases.iter().map(|a| a.to_string()).collect())
                })
                .collect(),
        }
    }
}
