//! Map queries: value extraction and key presence.

use std::collections::BTreeSet;

use crate::base::{Sym, TypeError};
use crate::map::{all_keys, fetch_value};
use crate::node::Seen;

use super::{Descr, MapField, MapTag};

impl Descr {
    /// The value type at `key`, for map types.
    ///
    /// Errors with [`TypeError::BadMap`] when the descriptor is not a map
    /// type (its static part carries non-map kinds, or no map component is
    /// present at all). For gradual maps the result is the dynamic
    /// extraction joined with the static one. The `not_set` marker never
    /// escapes: a key that may be absent simply contributes its value
    /// type, and a never-present key yields [`Descr::none`].
    pub fn map_get(&self, key: &Sym) -> Result<Descr, TypeError> {
        let stat = self.static_part();
        let dynamic = self.dynamic_part();
        if !stat.is_map_only() || dynamic.maps.is_none() {
            return Err(TypeError::bad_map(self.to_quoted_string()));
        }

        let fetch = |part: &Descr| match &part.maps {
            Some(bdd) => fetch_value(bdd, key, &mut Seen::default()),
            None => Descr::none(),
        };

        if self.is_gradual() {
            let (dynamic_value, _) = fetch(&dynamic).without_not_set();
            let (static_value, _) = fetch(&stat).without_not_set();
            Ok(Descr::dynamic_of(dynamic_value).union(&static_value))
        } else {
            let (value, _) = fetch(&stat).without_not_set();
            Ok(value)
        }
    }

    /// Whether every map in the type has `key`.
    pub fn map_has_key(&self, key: &Sym) -> bool {
        self.is_subtype_of(&Self::key_probe(key))
    }

    /// Whether some map in the type may have `key`.
    pub fn map_may_have_key(&self, key: &Sym) -> bool {
        self.intersects(&Self::key_probe(key))
    }

    /// The atom type of keys guaranteed to be present in every map of the
    /// type. Non-map types have no guaranteed keys.
    pub fn map_keys(&self) -> Descr {
        let mut candidates: BTreeSet<Sym> = BTreeSet::new();
        for part in [self.static_part(), self.dynamic_part()] {
            if let Some(bdd) = &part.maps {
                candidates.extend(all_keys(bdd));
            }
        }
        candidates.retain(|key| self.map_has_key(key));
        Descr::atoms(candidates)
    }

    /// The open map requiring `key` with any value.
    fn key_probe(key: &Sym) -> Descr {
        Descr::map(
            [(key.clone(), MapField::required(Descr::term()))],
            MapTag::Open,
        )
    }
}
