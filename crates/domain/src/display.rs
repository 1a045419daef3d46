use crate::{EquipmentCategory, EquipmentItem, catalog::EQUIPMENT};

pub const DISPLAY_CATEGORIES: [(&str, &[&str]); 7] = [
    ("Cable machines", &["crossover_cable", "hi_lo_pull_cable"]),
    ("Small weights", &["dumbbells"]),
    (
        "Benches and racks",
        &["flat_bench", "incline_bench", "pull_up_bar", "squat_rack"],
    ),
    (
        "Plated machines",
        &[
            "plate_loaded_hack_squat",
            "plate_loaded_iso_lateral_row",
            "plate_loaded_shoulder_machine",
        ],
    ),
    (
        "Weight machines",
        &[
            "row_machine",
            "assisted_weight_machine",
            "bicep_curl_machine",
            "fly_machine",
        ],
    ),
    ("Balls and accessories", &["ab_wheel", "stability_ball"]),
    ("Bars and plates", &["olympic_barbell", "plates"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentGroup<'a> {
    pub title: &'static str,
    pub items: Vec<&'a EquipmentItem>,
}

/// Partitions equipment into the curated display groups.
///
/// Groups follow the order of [`DISPLAY_CATEGORIES`], items keep the order of
/// the given slice, and groups without any item are omitted. Equipment not
/// referenced by a display group is not shown.
#[must_use]
pub fn group_for_display(subset: Option<&[EquipmentItem]>) -> Vec<EquipmentGroup<'_>> {
    let equipment = subset.unwrap_or(&EQUIPMENT);
    DISPLAY_CATEGORIES
        .iter()
        .map(|&(title, ids)| EquipmentGroup {
            title,
            items: equipment.iter().filter(|e| ids.contains(&e.id)).collect(),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

#[must_use]
pub fn search(query: &str) -> Vec<&'static EquipmentItem> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return EQUIPMENT.iter().collect();
    }

    EQUIPMENT
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&query)
                || e.id.contains(&query)
                || e.category.as_ref().to_lowercase().contains(&query)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: EquipmentCategory,
    pub items: Vec<&'a EquipmentItem>,
}

/// Groups equipment by category with categories sorted by key and items by
/// name, ignoring case.
#[must_use]
pub fn group_by_category<'a>(items: &[&'a EquipmentItem]) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup> = vec![];

    for &item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category: item.category,
                items: vec![item],
            }),
        }
    }

    groups.sort_by(|a, b| a.category.as_ref().cmp(b.category.as_ref()));
    for group in &mut groups {
        group.items.sort_by_cached_key(|e| e.name.to_lowercase());
    }

    groups
}
