//! Matching of query/retrieve filter elements against a data set.
//!
//! A filter element carries at most one value. An empty value, or one made
//! entirely of `*`, requests a universal match. `UI` filters match by set
//! intersection, numeric filters by equality membership, string filters by
//! a glob match of the first value, and sequence filters are accepted
//! unconditionally (sub-matching is not implemented).

use dcmio_core::{DataSet, DicomValue, Element, VrKind, VR};
use dcmio_dictionary_std::tags;
use glob::Pattern;
use snafu::{ResultExt, Snafu};

/// An error raised when a filter element is malformed.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Query filters carry at most one value.
    #[snafu(display("Multiple values found in filter element {}", tag))]
    MultipleFilterValues {
        /// tag of the offending filter element
        tag: dcmio_core::Tag,
    },
    /// The filter and the data set element disagree on the VR.
    #[snafu(display("VR mismatch: filter has {}, element has {}", filter, element))]
    FilterVrMismatch {
        /// the filter VR
        filter: VR,
        /// the element VR
        element: VR,
    },
    /// The filter value is not a valid glob pattern.
    #[snafu(display("Invalid filter pattern `{}`", pattern))]
    BadPattern {
        /// the pattern text
        pattern: String,
        /// the underlying parse error
        source: glob::PatternError,
    },
}

/// Type alias for a result from this module.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The outcome of matching a filter against a data set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryMatch<'a> {
    /// Whether the data set satisfies the filter.
    pub matched: bool,
    /// The element that satisfied it, when one exists. A universal match
    /// against an absent element matches with no element.
    pub element: Option<&'a Element>,
}

/// Check whether the data set satisfies the query/retrieve condition
/// carried by `filter`.
pub fn query<'a>(data_set: &'a DataSet, filter: &Element) -> Result<QueryMatch<'a>> {
    if filter.values().len() > 1 {
        return MultipleFilterValuesSnafu { tag: filter.tag() }.fail();
    }

    // these control the query itself and always match
    if filter.tag() == tags::QUERY_RETRIEVE_LEVEL || filter.tag() == tags::SPECIFIC_CHARACTER_SET {
        return Ok(QueryMatch {
            matched: true,
            element: None,
        });
    }

    let element = data_set.element(filter.tag());
    let matched = query_element(element, filter)?;
    Ok(QueryMatch {
        matched,
        element: if matched { element } else { None },
    })
}

fn query_element(element: Option<&Element>, filter: &Element) -> Result<bool> {
    if is_universal(filter) {
        return Ok(true);
    }

    if filter.vr() == VR::SQ {
        // sequence sub-matching is accepted unconditionally
        return Ok(true);
    }

    let element = match element {
        Some(element) => element,
        None => return Ok(false),
    };

    if filter.vr() != element.vr() {
        return FilterVrMismatchSnafu {
            filter: filter.vr(),
            element: element.vr(),
        }
        .fail();
    }

    if filter.vr() == VR::UI {
        // match if the element holds any of the requested UIDs
        for wanted in filter.values() {
            if element.values().contains(wanted) {
                return Ok(true);
            }
        }
        return Ok(false);
    }

    let wanted = &filter.values()[0];
    match wanted {
        DicomValue::Str(pattern) => {
            let pattern = Pattern::new(pattern).context(BadPatternSnafu {
                pattern: pattern.as_str(),
            })?;
            match element.values().first() {
                Some(DicomValue::Str(value)) => Ok(pattern.matches(value)),
                _ => Ok(false),
            }
        }
        DicomValue::U16(_)
        | DicomValue::U32(_)
        | DicomValue::I16(_)
        | DicomValue::I32(_)
        | DicomValue::F32(_)
        | DicomValue::F64(_) => Ok(element.values().contains(wanted)),
        _ => Ok(false),
    }
}

/// Whether the filter requests a universal match: no value at all, an
/// empty value, or a string of `*` only.
fn is_universal(filter: &Element) -> bool {
    let is_universal_glob = |s: &str| !s.is_empty() && s.bytes().all(|b| b == b'*');

    let value = match filter.values() {
        [] => return true,
        [value] => value,
        _ => return false,
    };

    match filter.kind() {
        VrKind::Bytes => matches!(value, DicomValue::Bytes(bytes) if bytes.is_empty()),
        VrKind::SingleString | VrKind::Date | VrKind::StringList => {
            matches!(value, DicomValue::Str(s) if s.is_empty() || is_universal_glob(s))
        }
        _ => false,
    }
}
