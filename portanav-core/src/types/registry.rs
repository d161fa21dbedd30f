//! Static section registry

use crate::error::{NavError, NavResult};
use crate::types::Section;

/// Immutable mapping of section identifiers to display metadata.
///
/// Built once at startup; lookups by id and by 1-based ordinal, iteration
/// in declaration order.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build a registry from an ordered section list.
    ///
    /// Rejects empty input and duplicate ids.
    pub fn new(sections: Vec<Section>) -> NavResult<Self> {
        if sections.is_empty() {
            return Err(NavError::ValidationError(
                "registry must contain at least one section".into(),
            ));
        }
        for (i, section) in sections.iter().enumerate() {
            if sections[..i].iter().any(|s| s.id == section.id) {
                return Err(NavError::ValidationError(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
        }
        Ok(Self { sections })
    }

    /// The seven-section portfolio registry.
    pub fn portfolio() -> Self {
        let sections = vec![
            Section::new("inicio", "Perfil | Luis San Martín", "Perfil profesional", 1),
            Section::new(
                "especialidades",
                "Habilidades | Luis San Martín",
                "Habilidades clave",
                2,
            ),
            Section::new(
                "servicios",
                "Servicios | Luis San Martín",
                "Servicios profesionales",
                3,
            ),
            Section::new(
                "experiencia",
                "Experiencia | Luis San Martín",
                "Experiencia reciente",
                4,
            ),
            Section::new(
                "educacion",
                "Educación | Luis San Martín",
                "Formación académica",
                5,
            ),
            Section::new(
                "certificaciones",
                "Certificaciones | Luis San Martín",
                "Certificaciones",
                6,
            ),
            Section::new("contacto", "Contacto | Luis San Martín", "Contacto", 7),
        ];
        // The fixed list above is non-empty and duplicate-free.
        Self { sections }
    }

    /// Get a section by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Get a section by its 1-based ordinal position.
    #[must_use]
    pub fn by_ordinal(&self, ordinal: usize) -> Option<&Section> {
        if ordinal == 0 {
            return None;
        }
        self.sections.get(ordinal - 1)
    }

    /// Zero-based position of a section id in registry order.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Section at a zero-based position.
    #[must_use]
    pub fn section_at(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Circular neighbour of `id` in registry order; `delta` is +1 or -1.
    #[must_use]
    pub fn neighbour_of(&self, id: &str, delta: i8) -> Option<&Section> {
        let pos = self.position_of(id)?;
        let len = self.sections.len();
        let next = if delta >= 0 {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        self.sections.get(next)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate sections in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// First section in registry order (the default active one).
    #[must_use]
    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }
}
