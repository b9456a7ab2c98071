//! Atlas configuration
//!
//! Layout manifests written in TOML. Multi-sheet manifests list their
//! sheets as an array of tables, and that array order is the canonical
//! sheet order.
//!
//! ```toml
//! prewarm = true
//!
//! [layout]
//! kind = "multi_sheet"
//!
//! [[layout.sheets]]
//! name = "walk"
//! width = 64.0
//! height = 16.0
//! cell_width = 16
//! cell_height = 16
//! ```

use crate::asset::TextureHandle;
use crate::atlas::drawable::{prewarm, Atlas};
use crate::atlas::grid_data::GridDescriptor;
use crate::atlas::grid_operations::create_grid_atlas_with_offset;
use crate::atlas::multi_sheet_operations::{create_multi_sheet, declare_sub_sheet};
use crate::error::{AtlasError, AtlasResult};
use serde::Deserialize;

/// Top-level atlas configuration
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AtlasConfig {
    /// Resolve every cell right after construction
    #[serde(default)]
    pub prewarm: bool,
    pub layout: LayoutConfig,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            prewarm: false,
            layout: LayoutConfig::Grid {
                cell_width: 16,
                cell_height: 16,
                offset_x: 0,
                offset_y: 0,
            },
        }
    }
}

/// How the texture is subdivided
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutConfig {
    /// Uniform grid from the offset to the texture's far corner
    Grid {
        cell_width: u32,
        cell_height: u32,
        #[serde(default)]
        offset_x: u32,
        #[serde(default)]
        offset_y: u32,
    },
    /// Named grids sharing the texture
    MultiSheet { sheets: Vec<SheetConfig> },
}

/// One named grid of a multi-sheet layout
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SheetConfig {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub cell_width: u32,
    pub cell_height: u32,
    #[serde(default)]
    pub offset_x: u32,
    #[serde(default)]
    pub offset_y: u32,
}

/// Parse an atlas configuration from TOML text
pub fn parse_atlas_config(text: &str) -> AtlasResult<AtlasConfig> {
    toml::from_str(text).map_err(|e| AtlasError::ConfigParseError {
        error: e.to_string(),
    })
}

/// Build the atlas a configuration describes
pub fn build_atlas(texture: TextureHandle, config: &AtlasConfig) -> AtlasResult<Atlas> {
    let mut atlas: Atlas = match &config.layout {
        LayoutConfig::Grid {
            cell_width,
            cell_height,
            offset_x,
            offset_y,
        } => create_grid_atlas_with_offset(texture, *cell_width, *cell_height, *offset_x, *offset_y)?
            .into(),
        LayoutConfig::MultiSheet { sheets } => {
            let declarations = sheets
                .iter()
                .map(|sheet| {
                    declare_sub_sheet(
                        &sheet.name,
                        GridDescriptor {
                            width: sheet.width,
                            height: sheet.height,
                            cell_width: sheet.cell_width,
                            cell_height: sheet.cell_height,
                            offset_x: sheet.offset_x,
                            offset_y: sheet.offset_y,
                        },
                    )
                })
                .collect();
            create_multi_sheet(texture, declarations)?.into()
        }
    };

    if config.prewarm {
        prewarm(&mut atlas)?;
    }

    Ok(atlas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::drawable::AtlasSource;
    use crate::atlas::CellKey;

    const HERO: &str = r#"
prewarm = true

[layout]
kind = "multi_sheet"

[[layout.sheets]]
name = "walk"
width = 64.0
height = 16.0
cell_width = 16
cell_height = 16

[[layout.sheets]]
name = "jump"
width = 32.0
height = 16.0
cell_width = 16
cell_height = 16
offset_y = 16
"#;

    #[test]
    fn test_parse_multi_sheet() {
        let config = parse_atlas_config(HERO).expect("valid toml");
        assert!(config.prewarm);
        match &config.layout {
            LayoutConfig::MultiSheet { sheets } => {
                let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(names, vec!["walk", "jump"]);
                assert_eq!(sheets[1].offset_y, 16);
                assert_eq!(sheets[0].offset_x, 0);
            }
            other => panic!("expected multi-sheet layout, got {:?}", other),
        }
    }

    #[test]
    fn test_build_prewarmed_multi_sheet() {
        let config = parse_atlas_config(HERO).expect("valid toml");
        let atlas = build_atlas(TextureHandle::new(31, 64.0, 32.0), &config).expect("valid layout");

        assert_eq!(atlas.cell_count(), 6);
        assert!(atlas.cached(&CellKey::Named("jump".into(), 1)).is_some());
    }

    #[test]
    fn test_parse_grid_defaults() {
        let config = parse_atlas_config(
            r#"
[layout]
kind = "grid"
cell_width = 16
cell_height = 8
"#,
        )
        .expect("valid toml");

        assert!(!config.prewarm);
        assert_eq!(
            config.layout,
            LayoutConfig::Grid {
                cell_width: 16,
                cell_height: 8,
                offset_x: 0,
                offset_y: 0
            }
        );

        let atlas = build_atlas(TextureHandle::new(32, 64.0, 32.0), &config).expect("valid grid");
        assert_eq!(atlas.cell_count(), 16);
        assert!(atlas.cached(&CellKey::Simple(0)).is_none());
    }

    #[test]
    fn test_default_config() {
        let atlas = build_atlas(TextureHandle::new(33, 64.0, 32.0), &AtlasConfig::default())
            .expect("default grid");
        assert_eq!(atlas.cell_count(), 8);
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            parse_atlas_config("[layout]\nkind = \"hexagonal\""),
            Err(AtlasError::ConfigParseError { .. })
        ));

        let config = parse_atlas_config(
            "[layout]\nkind = \"grid\"\ncell_width = 0\ncell_height = 8\n",
        )
        .expect("valid toml");
        assert!(matches!(
            build_atlas(TextureHandle::new(34, 64.0, 32.0), &config),
            Err(AtlasError::DivideByZero { .. })
        ));
    }

    #[test]
    fn test_negative_sheet_width() {
        let config = parse_atlas_config(&HERO.replace("width = 64.0", "width = -5.0"))
            .expect("valid toml");
        assert!(matches!(
            build_atlas(TextureHandle::new(35, 64.0, 32.0), &config),
            Err(AtlasError::RegionOutOfBounds { .. })
        ));
    }
}
