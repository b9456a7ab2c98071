//! Multi-Sheet Operations - Pure DOP Functions
//!
//! Global index layout: sheets in declaration order, each sheet's cells
//! row-major, concatenated. Animation frame numbers depend on this.

use super::cell_cache_data::CellKey;
use super::cell_cache_operations::{create_cell_cache, get_or_compute};
use super::grid_data::GridDescriptor;
use super::grid_operations::{compute_grid_region, descriptor_cell_count, validate_descriptor};
use super::multi_sheet_data::{MultiSheetData, SubSheetDeclaration};
use super::region_data::Region;
use crate::asset::TextureHandle;
use crate::error::{require_index, AtlasError, AtlasResult};
use rustc_hash::FxHashMap;

/// Create a sub-sheet declaration
pub fn declare_sub_sheet(name: &str, descriptor: GridDescriptor) -> SubSheetDeclaration {
    SubSheetDeclaration {
        name: name.to_string(),
        descriptor,
    }
}

/// Create a multi-sheet from declarations in canonical order
pub fn create_multi_sheet(
    texture: TextureHandle,
    sheets: Vec<SubSheetDeclaration>,
) -> AtlasResult<MultiSheetData> {
    let mut name_to_sheet = FxHashMap::default();
    name_to_sheet.reserve(sheets.len());
    let mut first_cell = Vec::with_capacity(sheets.len());
    let mut cell_count = 0;

    for (position, sheet) in sheets.iter().enumerate() {
        validate_descriptor(&sheet.descriptor, &texture, &sheet.name)?;

        if name_to_sheet.insert(sheet.name.clone(), position).is_some() {
            return Err(AtlasError::DuplicateSubAtlas {
                name: sheet.name.clone(),
            });
        }

        first_cell.push(cell_count);
        cell_count += descriptor_cell_count(&sheet.descriptor);
    }

    if cell_count == 0 {
        log::warn!(
            "[multi_sheet_operations::create_multi_sheet] {:?} has no cells across {} sheets",
            texture.id,
            sheets.len()
        );
    }

    log::debug!(
        "[multi_sheet_operations::create_multi_sheet] {:?}: {} sheets, {} cells",
        texture.id,
        sheets.len(),
        cell_count
    );

    Ok(MultiSheetData {
        texture,
        sheets,
        name_to_sheet,
        first_cell,
        cell_count,
        cache: create_cell_cache(),
    })
}

/// Total cells across every sheet
pub fn multi_sheet_cell_count(data: &MultiSheetData) -> usize {
    data.cell_count
}

/// Sheet names in canonical order
pub fn sub_sheet_names(data: &MultiSheetData) -> impl Iterator<Item = &str> {
    data.sheets.iter().map(|sheet| sheet.name.as_str())
}

fn find_sheet(data: &MultiSheetData, name: &str) -> AtlasResult<usize> {
    data.name_to_sheet
        .get(name)
        .copied()
        .ok_or_else(|| AtlasError::UnknownSubAtlas {
            name: name.to_string(),
        })
}

/// Cells in one named sheet
pub fn sub_sheet_cell_count(data: &MultiSheetData, name: &str) -> AtlasResult<usize> {
    let position = find_sheet(data, name)?;
    Ok(descriptor_cell_count(&data.sheets[position].descriptor))
}

/// Region of `local` inside sheet `name`, cached per (name, local)
pub fn multi_sheet_cell(data: &mut MultiSheetData, name: &str, local: usize) -> AtlasResult<Region> {
    let position = find_sheet(data, name)?;
    let descriptor = data.sheets[position].descriptor;
    require_index(local, descriptor_cell_count(&descriptor))?;

    let texture = data.texture;
    get_or_compute(
        &mut data.cache,
        CellKey::Named(name.to_string(), local),
        |_| compute_grid_region(&texture, &descriptor, local),
    )
}

/// Map a global index to (sheet name, local index)
pub fn locate_global_index(data: &MultiSheetData, global: usize) -> AtlasResult<(&str, usize)> {
    require_index(global, data.cell_count)?;

    // Last sheet starting at or before `global`; empty sheets share their
    // start with the next sheet and are skipped this way.
    let position = data.first_cell.partition_point(|&start| start <= global) - 1;
    let sheet = &data.sheets[position];

    Ok((sheet.name.as_str(), global - data.first_cell[position]))
}

/// Map (sheet name, local index) to a global index
pub fn global_index(data: &MultiSheetData, name: &str, local: usize) -> AtlasResult<usize> {
    let position = find_sheet(data, name)?;
    require_index(local, descriptor_cell_count(&data.sheets[position].descriptor))?;
    Ok(data.first_cell[position] + local)
}

/// Region at a flattened index across all sheets
pub fn multi_sheet_global_cell(data: &mut MultiSheetData, global: usize) -> AtlasResult<Region> {
    let (name, local) = locate_global_index(data, global)?;
    let name = name.to_string();
    multi_sheet_cell(data, &name, local)
}

/// Every cell of one sheet, row-major
pub fn sub_sheet_cells(data: &mut MultiSheetData, name: &str) -> AtlasResult<Vec<Region>> {
    let count = sub_sheet_cell_count(data, name)?;
    (0..count)
        .map(|local| multi_sheet_cell(data, name, local))
        .collect()
}

/// Every cell of every sheet in global index order
pub fn multi_sheet_drawables(data: &mut MultiSheetData) -> AtlasResult<Vec<Region>> {
    let names: Vec<String> = sub_sheet_names(data).map(str::to_string).collect();
    let mut drawables = Vec::with_capacity(data.cell_count);
    for name in &names {
        drawables.extend(sub_sheet_cells(data, name)?);
    }
    Ok(drawables)
}
