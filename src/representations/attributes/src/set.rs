use crate::{Attribute, AttributeKey};
use derive_more::IsVariant;
use indexmap::IndexMap;

/// Attributes applied to a symbol, in the order they were applied.
///
/// Applying pragmas is a set union: inserting an identical attribute twice
/// is a no-op, and independent attributes commute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSet {
    attributes: IndexMap<AttributeKey, Attribute>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum Inserted {
    New,
    AlreadyPresent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeConflict {
    pub existing: Attribute,
    pub incoming: Attribute,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, attribute: Attribute) -> Result<Inserted, AttributeConflict> {
        let key = attribute.key();

        if let Some(existing) = self.attributes.get(&key) {
            return if *existing == attribute {
                Ok(Inserted::AlreadyPresent)
            } else {
                Err(AttributeConflict {
                    existing: existing.clone(),
                    incoming: attribute,
                })
            };
        }

        if let Some(existing) = key
            .conflicts_with()
            .iter()
            .find_map(|other| self.attributes.get(other))
        {
            return Err(AttributeConflict {
                existing: existing.clone(),
                incoming: attribute,
            });
        }

        self.attributes.insert(key, attribute);
        Ok(Inserted::New)
    }

    pub fn get(&self, key: AttributeKey) -> Option<&Attribute> {
        self.attributes.get(&key)
    }

    pub fn contains(&self, key: AttributeKey) -> bool {
        self.attributes.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ForeignLanguage;
    use compiler::CallingConvention;

    #[test]
    fn independent_attributes_commute() {
        let mut forward = AttributeSet::new();
        forward.insert(Attribute::Acyclic).unwrap();
        forward.insert(Attribute::Final).unwrap();

        let mut backward = AttributeSet::new();
        backward.insert(Attribute::Final).unwrap();
        backward.insert(Attribute::Acyclic).unwrap();

        assert!(forward.contains(AttributeKey::Acyclic));
        assert!(forward.contains(AttributeKey::Final));
        assert_eq!(forward.len(), backward.len());
    }

    #[test]
    fn reinserting_is_idempotent() {
        let mut set = AttributeSet::new();
        assert_eq!(set.insert(Attribute::Bitsize(3)), Ok(Inserted::New));
        assert_eq!(set.insert(Attribute::Bitsize(3)), Ok(Inserted::AlreadyPresent));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn different_payload_conflicts() {
        let mut set = AttributeSet::new();
        set.insert(Attribute::CallConv(CallingConvention::Cdecl))
            .unwrap();

        let conflict = set
            .insert(Attribute::CallConv(CallingConvention::Stdcall))
            .unwrap_err();

        assert_eq!(conflict.existing, Attribute::CallConv(CallingConvention::Cdecl));
        assert_eq!(set.get(AttributeKey::CallConv), Some(&conflict.existing));
    }

    #[test]
    fn documented_pairs_conflict() {
        let mut set = AttributeSet::new();
        set.insert(Attribute::ByCopy).unwrap();
        assert!(set.insert(Attribute::ByRef).is_err());
        assert!(!set.contains(AttributeKey::ByRef));

        set.insert(Attribute::Import {
            language: ForeignLanguage::Cpp,
            pattern: "#.size()".into(),
        })
        .unwrap();
        assert!(
            set.insert(Attribute::Import {
                language: ForeignLanguage::C,
                pattern: "size".into(),
            })
            .is_err()
        );
    }
}
