//! Rendering descriptors back to the neutral [`TypeExpr`] form.
//!
//! Quoting is the inverse of evaluation up to semantic equivalence: for a
//! finite type `t`, evaluating `t.to_quoted()` yields a descriptor equal to
//! `t`. Map types render through the normalized DNF, one disjunct per
//! view; the `not_set` marker is stripped at this boundary and re-expressed
//! as a presence marker. Cyclic map types render their back-edges as
//! synthesized variables, which keeps the output finite.

use rustc_hash::FxHashMap;

use crate::base::Sym;
use crate::descr::Descr;
use crate::kind::{AtomSet, BasicKind};
use crate::map::{MapBdd, normalize};
use crate::node::Seen;
use crate::syntax::{FieldExpr, MapTag, TypeExpr};

impl Descr {
    /// Render to the neutral structured form.
    pub fn to_quoted(&self) -> TypeExpr {
        quote_descr(self, &mut QuoteCtx::default())
    }

    /// Render to a human-readable string.
    pub fn to_quoted_string(&self) -> String {
        self.to_quoted().to_string()
    }
}

impl crate::node::Node {
    /// Render one stepped layer to the neutral structured form.
    pub fn to_quoted(&self) -> TypeExpr {
        self.step().to_quoted()
    }

    /// Render one stepped layer to a human-readable string.
    pub fn to_quoted_string(&self) -> String {
        self.step().to_quoted_string()
    }
}

#[derive(Default)]
struct QuoteCtx {
    /// Map BDDs currently being rendered, with the variable naming each.
    /// A structural revisit is a cycle and renders as the variable.
    path: FxHashMap<MapBdd, Sym>,
    counter: usize,
}

fn quote_descr(descr: &Descr, ctx: &mut QuoteCtx) -> TypeExpr {
    let Some(dynamic) = &descr.dynamic else {
        return quote_static(descr, ctx);
    };

    let dynamic_expr = if dynamic.is_term() {
        TypeExpr::Dynamic
    } else {
        TypeExpr::Inter(vec![TypeExpr::Dynamic, quote_static(dynamic, ctx)])
    };

    let stat = descr.static_part();
    if stat.has_no_kinds() {
        dynamic_expr
    } else {
        TypeExpr::Union(vec![dynamic_expr, quote_static(&stat, ctx)])
    }
}

fn quote_static(descr: &Descr, ctx: &mut QuoteCtx) -> TypeExpr {
    let mut parts: Vec<TypeExpr> = Vec::new();

    for kind in descr.bitmap.iter() {
        parts.push(basic_expr(kind));
    }

    if let Some(atoms) = &descr.atoms {
        parts.push(match atoms {
            AtomSet::Union(names) => TypeExpr::Atom(names.clone()),
            AtomSet::Negation(names) if names.is_empty() => TypeExpr::AtomTop,
            AtomSet::Negation(names) => TypeExpr::Inter(vec![
                TypeExpr::AtomTop,
                TypeExpr::Not(Box::new(TypeExpr::Atom(names.clone()))),
            ]),
        });
    }

    if let Some(bdd) = &descr.maps {
        parts.extend(quote_map(bdd, ctx));
    }

    match parts.len() {
        0 => TypeExpr::None,
        1 => parts.pop().unwrap(),
        _ => TypeExpr::Union(parts),
    }
}

fn basic_expr(kind: BasicKind) -> TypeExpr {
    match kind {
        BasicKind::Binary => TypeExpr::Binary,
        BasicKind::EmptyList => TypeExpr::EmptyList,
        BasicKind::Integer => TypeExpr::Integer,
        BasicKind::Float => TypeExpr::Float,
        BasicKind::Pid => TypeExpr::Pid,
        BasicKind::Port => TypeExpr::Port,
        BasicKind::Reference => TypeExpr::Reference,
        BasicKind::NonEmptyList => TypeExpr::NonEmptyList,
        BasicKind::Tuple => TypeExpr::Tuple,
        BasicKind::Fun => TypeExpr::Fun,
        BasicKind::NotSet => panic!("not_set escaped into a quoted type"),
    }
}

/// Render a map BDD as one expression per non-empty disjunct of its
/// normalized DNF.
fn quote_map(bdd: &MapBdd, ctx: &mut QuoteCtx) -> Vec<TypeExpr> {
    if let Some(name) = ctx.path.get(bdd) {
        return vec![TypeExpr::Var(name.clone())];
    }
    ctx.counter += 1;
    let name = Sym::from(format!("t{}", ctx.counter));
    ctx.path.insert(bdd.clone(), name);

    let views = normalize(bdd, &mut Seen::default());
    let mut out = Vec::new();
    for view in views {
        let mut fields = Vec::new();
        for (key, value) in &view.fields {
            let (stripped, optional) = value.without_not_set();
            let field = if !optional {
                FieldExpr::required(quote_descr(&stripped, ctx))
            } else if stripped.is_empty() {
                FieldExpr::absent()
            } else {
                FieldExpr::optional(quote_descr(&stripped, ctx))
            };
            fields.push((key.clone(), field));
        }

        out.push(match (view.is_open, view.has_empty) {
            (true, true) => TypeExpr::Map { fields, tag: MapTag::Open },
            (false, true) => TypeExpr::Map { fields, tag: MapTag::Closed },
            // Open but without the exactly-these-fields case: some
            // undeclared key is required to be present.
            (true, false) => TypeExpr::Inter(vec![
                TypeExpr::Map { fields: fields.clone(), tag: MapTag::Open },
                TypeExpr::Not(Box::new(TypeExpr::Map { fields, tag: MapTag::Closed })),
            ]),
            (false, false) => continue,
        });
    }

    ctx.path.remove(bdd);
    out
}
