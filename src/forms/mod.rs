//! Static form-variant tables.
//!
//! Every species with selectable forms maps to one [`FormDescriptor`] listing
//! its variants. Resolution and toggling are generic over the descriptor, so
//! species with unusual toggle layouts (two mega forms, a mega that excludes a
//! regional form, several regional breeds) are plain table rows.

mod tables;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{FormSlot, PokemonSelection};

/// One selectable variant of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormVariant {
    pub slot: FormSlot,
    /// Key stored in the selection slot while this variant is active.
    pub key: &'static str,
    pub form_name: &'static str,
    /// Id used for artwork and variant lookups.
    pub pokedex_id: u32,
    pub types: &'static [&'static str],
    /// Full display name replacing the `"{name} ({form})"` composition.
    pub label: Option<&'static str>,
    /// Token appended to the id in artwork file names.
    pub sprite_suffix: &'static str,
    /// Slots switched off whenever this variant is toggled.
    pub clears: &'static [FormSlot],
}

impl FormVariant {
    pub const fn new(
        slot: FormSlot,
        key: &'static str,
        form_name: &'static str,
        pokedex_id: u32,
        types: &'static [&'static str],
    ) -> Self {
        Self {
            slot,
            key,
            form_name,
            pokedex_id,
            types,
            label: None,
            sprite_suffix: "",
            clears: &[],
        }
    }

    pub const fn clearing(mut self, slots: &'static [FormSlot]) -> Self {
        self.clears = slots;
        self
    }

    pub const fn labelled(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Name shown while this variant is active.
    pub fn display_name(&self, base_name: &str) -> String {
        match self.label {
            Some(label) => label.to_string(),
            None => format!("{} ({})", base_name, self.form_name),
        }
    }

    /// Indicator icon for the toggle button.
    pub fn symbol_path(&self) -> String {
        let region = match self.slot {
            FormSlot::Mega => Some("mega"),
            FormSlot::Special => Some("origin"),
            FormSlot::Regional => {
                let form = self.form_name.to_lowercase();
                ["alola", "galar", "hisui", "paldea"]
                    .into_iter()
                    .find(|region| form.contains(region))
            }
        };
        region
            .map(|r| format!("/symbols/{}-symbol.png", r))
            .unwrap_or_default()
    }
}

/// All variants of one base species.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDescriptor {
    /// Replaces the formatted base name while no variant is active.
    pub base_label: Option<&'static str>,
    pub variants: Vec<FormVariant>,
}

impl FormDescriptor {
    pub fn variant(&self, slot: FormSlot, key: &str) -> Option<&FormVariant> {
        self.variants
            .iter()
            .find(|v| v.slot == slot && v.key == key)
    }

    fn active_in(&self, selection: &PokemonSelection, slot: FormSlot) -> Option<&FormVariant> {
        selection
            .slot(slot)
            .and_then(|key| self.variant(slot, key))
    }

    /// The variant currently shown: mega beats regional beats base, and an
    /// active special form is overlaid on top of either.
    pub fn active_variant(&self, selection: &PokemonSelection) -> Option<&FormVariant> {
        let primary = self
            .active_in(selection, FormSlot::Mega)
            .or_else(|| self.active_in(selection, FormSlot::Regional));
        self.active_in(selection, FormSlot::Special).or(primary)
    }

    pub fn is_active(&self, selection: &PokemonSelection, variant: &FormVariant) -> bool {
        selection.slot(variant.slot) == Some(variant.key)
    }

    /// Flip one variant on or off. Switching a variant on replaces whatever
    /// else was in its slot. Unknown keys leave the selection unchanged.
    pub fn toggle(&self, selection: &PokemonSelection, slot: FormSlot, key: &str) -> PokemonSelection {
        let mut next = selection.clone();
        let Some(variant) = self.variant(slot, key) else {
            return next;
        };

        if selection.slot(slot) == Some(key) {
            next.set_slot(slot, None);
        } else {
            next.set_slot(slot, Some(variant.key.to_string()));
        }
        for cleared in variant.clears {
            next.set_slot(*cleared, None);
        }
        next
    }
}

/// Lookup from raw species name to its form descriptor.
#[derive(Debug, Clone, Default)]
pub struct FormTables {
    descriptors: HashMap<String, FormDescriptor>,
    alternate_forms: HashMap<&'static str, &'static [&'static str]>,
}

static BUILTIN: Lazy<FormTables> = Lazy::new(FormTables::build_builtin);

impl FormTables {
    /// The tables shipped with the service.
    pub fn builtin() -> &'static FormTables {
        &BUILTIN
    }

    fn build_builtin() -> Self {
        let mut tables = FormTables::default();

        for &(raw_name, form_name, id, types) in tables::MEGA_EVOLUTIONS {
            tables.push(
                raw_name,
                FormVariant::new(FormSlot::Mega, "mega", form_name, id, types),
            );
        }
        for &(raw_name, form_name, id, types) in tables::REGIONAL_FORMS {
            tables.push(
                raw_name,
                FormVariant::new(FormSlot::Regional, "active", form_name, id, types),
            );
        }
        for &(raw_name, base_label, variants) in tables::MULTI_SLOT_FORMS {
            tables.insert(
                raw_name,
                FormDescriptor {
                    base_label,
                    variants: variants.to_vec(),
                },
            );
        }
        tables.alternate_forms = tables::ALTERNATE_FORMS.iter().copied().collect();

        tables
    }

    /// Append a variant to a species' descriptor, creating it if needed.
    pub fn push(&mut self, raw_name: &str, variant: FormVariant) {
        self.descriptors
            .entry(raw_name.to_string())
            .or_default()
            .variants
            .push(variant);
    }

    pub fn insert(&mut self, raw_name: &str, descriptor: FormDescriptor) {
        self.descriptors.insert(raw_name.to_string(), descriptor);
    }

    pub fn get(&self, raw_name: &str) -> Option<&FormDescriptor> {
        self.descriptors.get(raw_name)
    }

    /// Whether `pokedex_id` belongs to some variant in the tables.
    pub fn has_variant_id(&self, pokedex_id: u32) -> bool {
        self.descriptors
            .values()
            .flat_map(|d| d.variants.iter())
            .any(|v| v.pokedex_id == pokedex_id)
    }

    /// Cosmetic alternate form names for the detail panel. Raw names such as
    /// `deoxys-normal` fall back to their base part.
    pub fn alternate_forms(&self, raw_name: &str) -> &'static [&'static str] {
        let base = raw_name.split('-').next().unwrap_or(raw_name);
        self.alternate_forms
            .get(raw_name)
            .or_else(|| self.alternate_forms.get(base))
            .copied()
            .unwrap_or(&[])
    }
}
