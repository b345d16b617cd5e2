use crate::Generator;
use marquee_core::MovieId;
use uuid::Uuid;

/// Generates random (v4) UUIDs rendered in their hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for UuidGenerator {
    type Output = MovieId;

    fn generate(&self) -> Self::Output {
        MovieId::new(Uuid::new_v4().hyphenated().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_uuid_shaped_ids() {
        let id = UuidGenerator::new().generate();
        let parsed = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.as_str().len(), 36);
    }

    #[test]
    fn ids_do_not_repeat() {
        let generator = UuidGenerator::new();
        let ids: HashSet<_> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
