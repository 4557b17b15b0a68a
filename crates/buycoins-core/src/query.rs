//! GraphQL document construction.
//!
//! An [`OperationRequest`] describes one query or mutation: the operation
//! kind, the root command, its arguments and the tree of fields to fetch
//! back. [`build`] serializes it into the document text the Buycoins backend
//! expects:
//!
//! ```text
//! query { getOrders(status:open) { dynamicPriceExpiry,orders{edges{node{id,side}}} } }
//! ```
//!
//! # Argument rendering
//!
//! This is not a general GraphQL literal encoder. String arguments are
//! written as bare, unquoted tokens (`cryptocurrency:bitcoin`), which is the
//! convention the backend's custom scalars and enums are queried with.
//! Numbers and booleans use their natural literal form.
//!
//! # Example
//!
//! ```
//! use buycoins_core::query::{build, FieldSelection, OperationKind, OperationRequest};
//!
//! let request = OperationRequest::new(
//!     OperationKind::Query,
//!     "getBalances",
//!     [FieldSelection::new("id"), FieldSelection::new("confirmedBalance")],
//! )?
//! .argument("cryptocurrency", "bitcoin");
//!
//! assert_eq!(
//!     build(&request)?,
//!     "query { getBalances(cryptocurrency:bitcoin) { id,confirmedBalance } }"
//! );
//! # Ok::<(), buycoins_core::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A GraphQL operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// A query operation (read-only).
    Query,
    /// A mutation operation (modifies data).
    Mutation,
}

impl OperationKind {
    /// The keyword that opens the document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "query" => Ok(Self::Query),
            "mutation" => Ok(Self::Mutation),
            other => Err(Error::InvalidOperation(other.to_string())),
        }
    }
}

/// A literal argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// A boolean literal.
    Bool(bool),
    /// An integer literal.
    Int(i64),
    /// A floating point literal.
    Float(f64),
    /// A bare token, written unquoted.
    Token(String),
}

impl ArgValue {
    /// Whether the value has a GraphQL literal form.
    ///
    /// Only non-finite floats fail.
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Float(value) => value.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Token(value) => f.write_str(value),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Token(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        Self::Token(value.clone())
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Named arguments, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Vec<(String, ArgValue)>);

impl Arguments {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an argument.
    ///
    /// Setting a name that is already present replaces its value without
    /// moving it.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Look up an argument by name.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{name}:{value}")?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Self::new();
        for (name, value) in iter {
            arguments.insert(name, value);
        }
        arguments
    }
}

impl Serialize for Arguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Arguments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ArgumentsVisitor;

        impl<'de> Visitor<'de> for ArgumentsVisitor {
            type Value = Arguments;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of argument names to literal values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut arguments = Arguments::new();
                while let Some((name, value)) = access.next_entry::<String, ArgValue>()? {
                    arguments.insert(name, value);
                }
                Ok(arguments)
            }
        }

        deserializer.deserialize_map(ArgumentsVisitor)
    }
}

/// One requested field, possibly with arguments and nested fields.
///
/// The serde representation matches the plain dictionaries callers have
/// historically passed in:
///
/// ```json
/// {"field": "orders", "args": {"first": 10}, "fields": [{"field": "id"}]}
/// ```
///
/// A node deserialized without a `field` key has an empty name and is
/// rejected by [`validate_selection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSelection {
    #[serde(rename = "field", default)]
    name: String,
    #[serde(rename = "args", default, skip_serializing_if = "Arguments::is_empty")]
    arguments: Arguments,
    #[serde(rename = "fields", default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<FieldSelection>,
}

impl FieldSelection {
    /// Create a leaf field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Arguments::new(),
            children: Vec::new(),
        }
    }

    /// Create a field with nested fields.
    pub fn with_children(
        name: impl Into<String>,
        children: impl IntoIterator<Item = FieldSelection>,
    ) -> Self {
        Self::new(name).children(children)
    }

    /// Create leaf fields from a list of names.
    pub fn leaves<I, S>(names: I) -> Vec<FieldSelection>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Self::new).collect()
    }

    /// Add a field argument.
    pub fn argument(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.arguments.insert(name, value);
        self
    }

    /// Append one nested field.
    pub fn child(mut self, child: FieldSelection) -> Self {
        self.children.push(child);
        self
    }

    /// Append nested fields.
    pub fn children(mut self, children: impl IntoIterator<Item = FieldSelection>) -> Self {
        self.children.extend(children);
        self
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field arguments.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// The nested fields.
    pub fn nested(&self) -> &[FieldSelection] {
        &self.children
    }

    /// Whether the field is a scalar leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in the subtree rooted at this field.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FieldSelection::depth)
            .max()
            .unwrap_or(0)
    }

    fn render(&self, out: &mut String) {
        out.push_str(&self.name);
        if !self.arguments.is_empty() {
            out.push('(');
            out.push_str(&self.arguments.to_string());
            out.push(')');
        }
        if !self.children.is_empty() {
            out.push('{');
            render_fields(&self.children, out);
            out.push('}');
        }
    }
}

/// A single query or mutation against the API.
///
/// Built fresh for every call and consumed once by [`build`].
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    kind: OperationKind,
    command: String,
    arguments: Arguments,
    selection: Vec<FieldSelection>,
}

impl OperationRequest {
    /// Create a request.
    ///
    /// Fails with [`Error::InvalidCommand`] for a blank command and with
    /// [`Error::EmptySelection`] when the selection is empty or any field in
    /// it has a blank name.
    pub fn new(
        kind: OperationKind,
        command: impl Into<String>,
        selection: impl IntoIterator<Item = FieldSelection>,
    ) -> Result<Self> {
        let request = Self {
            kind,
            command: command.into(),
            arguments: Arguments::new(),
            selection: selection.into_iter().collect(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Create a query request.
    pub fn query(
        command: impl Into<String>,
        selection: impl IntoIterator<Item = FieldSelection>,
    ) -> Result<Self> {
        Self::new(OperationKind::Query, command, selection)
    }

    /// Create a mutation request.
    pub fn mutation(
        command: impl Into<String>,
        selection: impl IntoIterator<Item = FieldSelection>,
    ) -> Result<Self> {
        Self::new(OperationKind::Mutation, command, selection)
    }

    /// Set a root argument.
    pub fn argument(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.arguments.insert(name, value);
        self
    }

    /// Set several root arguments, in order.
    pub fn arguments(mut self, arguments: Arguments) -> Self {
        for (name, value) in arguments.0 {
            self.arguments.insert(name, value);
        }
        self
    }

    /// The operation kind.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The root command name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The root arguments.
    pub fn root_arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// The requested fields.
    pub fn selection(&self) -> &[FieldSelection] {
        &self.selection
    }

    /// Check the command, the root arguments and the whole selection tree.
    pub fn validate(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(Error::InvalidCommand(self.command.clone()));
        }
        validate_arguments(&self.arguments)?;
        validate_selection(&self.selection)?;
        validate_field_arguments(&self.selection)
    }
}

/// Check that a selection is non-empty and that every field in it is named.
///
/// The check walks the whole tree depth-first before anything is rendered.
pub fn validate_selection(selection: &[FieldSelection]) -> Result<()> {
    if selection.is_empty() {
        return Err(Error::empty_selection(""));
    }
    let mut path = Vec::new();
    validate_fields(selection, &mut path)
}

fn validate_arguments(arguments: &Arguments) -> Result<()> {
    match arguments.iter().find(|(_, value)| !value.is_literal()) {
        Some((name, _)) => Err(Error::InvalidArgument(name.to_string())),
        None => Ok(()),
    }
}

fn validate_field_arguments(fields: &[FieldSelection]) -> Result<()> {
    for field in fields {
        validate_arguments(&field.arguments)?;
        validate_field_arguments(&field.children)?;
    }
    Ok(())
}

fn validate_fields<'a>(fields: &'a [FieldSelection], path: &mut Vec<&'a str>) -> Result<()> {
    for field in fields {
        if field.name.trim().is_empty() {
            return Err(Error::empty_selection(path.join(".")));
        }
        if !field.children.is_empty() {
            path.push(&field.name);
            validate_fields(&field.children, path)?;
            path.pop();
        }
    }
    Ok(())
}

fn render_fields(fields: &[FieldSelection], out: &mut String) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        field.render(out);
    }
}

/// Serialize a request into a GraphQL document.
///
/// The request is validated in full before any text is produced, so a
/// failure never leaves partial output behind.
pub fn build(request: &OperationRequest) -> Result<String> {
    request.validate()?;

    let mut document = String::new();
    document.push_str(request.kind.as_str());
    document.push_str(" { ");
    document.push_str(&request.command);
    if !request.arguments.is_empty() {
        document.push('(');
        document.push_str(&request.arguments.to_string());
        document.push(')');
    }
    document.push_str(" { ");
    render_fields(&request.selection, &mut document);
    document.push_str(" } }");
    Ok(document)
}
