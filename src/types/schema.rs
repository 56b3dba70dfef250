//! Destination shape resolution for record destinations
//!
//! A record type declares its fields as static metadata; the resolver turns
//! that metadata into a binding table mapping column names to field slots.
//! Binding text is parsed exactly once, here; the per-row path dispatches
//! on the closed [`Conversion`] enum only.

use crate::error::{Error, Result};
use crate::types::{FieldKind, Value};
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Conversion selected by a field's binding tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// No tag: direct match, numeric conversion by value, or byte-buffer parse
    Direct,
    /// `json` tag: decode a JSON text column into a map or list field
    Json,
    /// `time` tag: parse a local `YYYY-MM-DD HH:MM:SS` column into Unix milliseconds
    Time,
}

/// One declared field of a record destination
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Exported field name; doubles as the bound column name when no
    /// binding text is given.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Optional binding text: `"column"` or `"column,conversion"` with
    /// conversion one of `json` or `time`.
    pub binding: Option<&'static str>,
}

impl FieldDef {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            binding: None,
        }
    }

    pub fn bound(name: &'static str, kind: FieldKind, binding: &'static str) -> Self {
        Self {
            name,
            kind,
            binding: Some(binding),
        }
    }
}

/// A record destination.
///
/// Implementors declare their fields once and expose a typed write
/// capability per slot; the materializer never inspects the concrete type
/// beyond this contract. Fields without a matching column keep the value
/// from `Default`.
pub trait Record: Default {
    /// Declared fields, in slot order
    fn fields() -> Vec<FieldDef>;

    /// Write a converted value into the given slot.
    ///
    /// The materializer only calls this with a value already converted to
    /// the slot's declared kind.
    fn write(&mut self, slot: usize, value: Value) -> Result<()>;
}

/// One resolved column binding
#[derive(Debug, Clone)]
pub struct Binding {
    pub slot: usize,
    pub field: &'static str,
    pub kind: FieldKind,
    pub conversion: Conversion,
}

/// Column name to field binding, built once per record type
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    columns: HashMap<String, Binding>,
}

impl BindingTable {
    /// Resolve declared fields into a binding table.
    ///
    /// The bound column defaults to the field's own name; binding text
    /// overrides it and may select a conversion. Duplicate column bindings
    /// keep the last declaration.
    pub fn resolve(fields: &[FieldDef]) -> Result<Self> {
        let mut columns = HashMap::with_capacity(fields.len());
        for (slot, def) in fields.iter().enumerate() {
            let (column, conversion) = match def.binding {
                None => (def.name, Conversion::Direct),
                Some(text) => parse_binding(def.name, text)?,
            };
            columns.insert(
                column.to_string(),
                Binding {
                    slot,
                    field: def.name,
                    kind: def.kind.clone(),
                    conversion,
                },
            );
        }
        Ok(Self { columns })
    }

    pub fn get(&self, column: &str) -> Option<&Binding> {
        self.columns.get(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn parse_binding(field: &str, text: &'static str) -> Result<(&'static str, Conversion)> {
    let mut parts = text.splitn(2, ',');
    let column = parts.next().unwrap_or("").trim();
    if column.is_empty() {
        return Err(Error::InvalidDestination(format!(
            "field {} binds an empty column name",
            field
        )));
    }
    let conversion = match parts.next().map(str::trim) {
        None => Conversion::Direct,
        Some("json") => Conversion::Json,
        Some("time") => Conversion::Time,
        Some(other) => {
            return Err(Error::InvalidDestination(format!(
                "field {} declares unknown conversion '{}'",
                field, other
            )));
        }
    };
    Ok((column, conversion))
}

static BINDINGS: LazyLock<RwLock<HashMap<TypeId, Arc<BindingTable>>>> =
    LazyLock::new(Default::default);

/// Binding table for a record type.
///
/// The table is a pure function of the type, so it is built on first use
/// and shared read-only afterwards. Redundant builds under contention are
/// harmless.
pub fn bindings_for<T: Record + 'static>() -> Result<Arc<BindingTable>> {
    let id = TypeId::of::<T>();
    if let Some(table) = BINDINGS.read().get(&id) {
        return Ok(Arc::clone(table));
    }
    let table = Arc::new(BindingTable::resolve(&T::fields())?);
    BINDINGS.write().insert(id, Arc::clone(&table));
    Ok(table)
}
