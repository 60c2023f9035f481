use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::VisibilityParseError;

/// Memo visibility as carried by the memo service.
///
/// Only [`Visibility::SELECTABLE`] members are offered as options.
/// `Unspecified` and `Unrecognized` model stale or forward-incompatible
/// data: they can be displayed (with a fallback glyph and an empty label)
/// but never chosen.
///
/// Equality and hashing follow the wire number, so `Unrecognized(2)` built
/// by hand is the same value as `Protected`.
///
/// The JSON form is the wire name. An unknown number serializes as
/// `"UNRECOGNIZED"` and reads back as `Unrecognized(-1)`; the number itself
/// is lost on that path. Use [`Visibility::to_i32`] to keep it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "WireVisibility")]
pub enum Visibility {
    #[default]
    Unspecified,
    Private,
    Protected,
    Public,
    Unrecognized(i32),
}

impl PartialEq for Visibility {
    fn eq(&self, other: &Self) -> bool {
        self.to_i32() == other.to_i32()
    }
}

impl Eq for Visibility {}

impl Hash for Visibility {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_i32().hash(state);
    }
}

impl Visibility {
    /// Options in declaration order: most restricted first.
    pub const SELECTABLE: [Visibility; 3] =
        [Visibility::Private, Visibility::Protected, Visibility::Public];

    /// Convert a wire number. Unknown numbers are kept as `Unrecognized`.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Visibility::Unspecified,
            1 => Visibility::Private,
            2 => Visibility::Protected,
            3 => Visibility::Public,
            other => Visibility::Unrecognized(other),
        }
    }

    /// Same value with a known number mapped to its named member.
    pub fn canonical(self) -> Self {
        Self::from_i32(self.to_i32())
    }

    pub fn to_i32(self) -> i32 {
        match self {
            Visibility::Unspecified => 0,
            Visibility::Private => 1,
            Visibility::Protected => 2,
            Visibility::Public => 3,
            Visibility::Unrecognized(value) => value,
        }
    }

    /// Wire name of the value. Every unknown number maps to
    /// `"UNRECOGNIZED"`.
    pub fn as_str(self) -> &'static str {
        match self.canonical() {
            Visibility::Unspecified => "VISIBILITY_UNSPECIFIED",
            Visibility::Private => "PRIVATE",
            Visibility::Protected => "PROTECTED",
            Visibility::Public => "PUBLIC",
            Visibility::Unrecognized(_) => "UNRECOGNIZED",
        }
    }

    /// Translator key for the option label, `None` for values that are not
    /// offered as options.
    pub fn label_key(self) -> Option<&'static str> {
        match self.canonical() {
            Visibility::Private => Some("memo.visibility.private"),
            Visibility::Protected => Some("memo.visibility.protected"),
            Visibility::Public => Some("memo.visibility.public"),
            Visibility::Unspecified | Visibility::Unrecognized(_) => None,
        }
    }

    pub fn is_selectable(self) -> bool {
        self.label_key().is_some()
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = VisibilityParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "VISIBILITY_UNSPECIFIED" => Ok(Visibility::Unspecified),
            "PRIVATE" => Ok(Visibility::Private),
            "PROTECTED" => Ok(Visibility::Protected),
            "PUBLIC" => Ok(Visibility::Public),
            "UNRECOGNIZED" => Ok(Visibility::Unrecognized(-1)),
            other => Err(VisibilityParseError::UnknownName(other.to_owned())),
        }
    }
}

impl From<Visibility> for &'static str {
    fn from(value: Visibility) -> Self {
        value.as_str()
    }
}

/// Accepted JSON shapes: the wire number or the wire name.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireVisibility {
    Number(i32),
    Name(String),
}

impl TryFrom<WireVisibility> for Visibility {
    type Error = VisibilityParseError;

    fn try_from(value: WireVisibility) -> Result<Self, Self::Error> {
        match value {
            WireVisibility::Number(number) => Ok(Visibility::from_i32(number)),
            WireVisibility::Name(name) => name.parse(),
        }
    }
}

/// Resolves display labels by lookup key.
///
/// Implementations are expected to be total: a missing key should resolve
/// to some string (usually the key itself) rather than fail.
pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// A selectable option with its resolved label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityOption {
    pub value: Visibility,
    pub label: String,
}

/// Build the option list in declaration order.
///
/// Labels are resolved on every call so a translator whose dictionary
/// changes at runtime is picked up on the next render.
pub fn visibility_options<T>(translator: &T) -> Vec<VisibilityOption>
where
    T: Translator + ?Sized,
{
    Visibility::SELECTABLE
        .iter()
        .filter_map(|value| {
            value.label_key().map(|key| VisibilityOption {
                value: *value,
                label: translator.translate(key),
            })
        })
        .collect()
}

/// Find the option matching `value`, if any.
pub fn current_option(
    options: &[VisibilityOption],
    value: Visibility,
) -> Option<&VisibilityOption> {
    options.iter().find(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(key: &str) -> String {
        format!("[{key}]")
    }

    #[test]
    fn given_translator_when_building_options_then_order_is_fixed() {
        let options = visibility_options(&echo);

        let values: Vec<Visibility> =
            options.iter().map(|option| option.value).collect();
        assert_eq!(values, Visibility::SELECTABLE.to_vec());
        assert_eq!(options[0].label, "[memo.visibility.private]");
        assert_eq!(options[1].label, "[memo.visibility.protected]");
        assert_eq!(options[2].label, "[memo.visibility.public]");
    }

    #[test]
    fn given_selectable_value_when_finding_current_then_returns_single_match() {
        let options = visibility_options(&echo);

        for value in Visibility::SELECTABLE {
            let matches =
                options.iter().filter(|option| option.value == value).count();
            assert_eq!(matches, 1);
            assert_eq!(
                current_option(&options, value).map(|option| option.value),
                Some(value)
            );
        }
    }

    #[test]
    fn given_anomalous_value_when_finding_current_then_returns_none() {
        let options = visibility_options(&echo);

        assert!(current_option(&options, Visibility::Unspecified).is_none());
        assert!(
            current_option(&options, Visibility::Unrecognized(42)).is_none()
        );
    }

    #[test]
    fn given_changing_translator_when_rebuilding_then_labels_follow() {
        let first = visibility_options(&|_: &str| String::from("one"));
        let second = visibility_options(&|_: &str| String::from("two"));

        assert!(first.iter().all(|option| option.label == "one"));
        assert!(second.iter().all(|option| option.label == "two"));
    }

    #[test]
    fn given_wire_numbers_when_converting_then_unknown_is_kept() {
        assert_eq!(Visibility::from_i32(0), Visibility::Unspecified);
        assert_eq!(Visibility::from_i32(1), Visibility::Private);
        assert_eq!(Visibility::from_i32(3), Visibility::Public);
        assert_eq!(Visibility::from_i32(9), Visibility::Unrecognized(9));
        assert_eq!(Visibility::Unrecognized(9).to_i32(), 9);
        assert!(!Visibility::from_i32(9).is_selectable());
    }

    #[test]
    fn given_wire_names_when_parsing_then_unknown_name_fails() {
        assert_eq!(
            "PROTECTED".parse::<Visibility>(),
            Ok(Visibility::Protected)
        );
        assert_eq!(
            "HIDDEN".parse::<Visibility>(),
            Err(VisibilityParseError::UnknownName(String::from("HIDDEN")))
        );
    }

    #[test]
    fn given_json_value_when_deserializing_then_accepts_name_or_number() {
        let by_name: Visibility =
            serde_json::from_str("\"PUBLIC\"").expect("name");
        let by_number: Visibility = serde_json::from_str("2").expect("number");
        let unknown: Visibility = serde_json::from_str("7").expect("unknown");

        assert_eq!(by_name, Visibility::Public);
        assert_eq!(by_number, Visibility::Protected);
        assert_eq!(unknown, Visibility::Unrecognized(7));
        assert!(serde_json::from_str::<Visibility>("\"HIDDEN\"").is_err());
        assert_eq!(
            serde_json::to_string(&Visibility::Private).expect("serialize"),
            "\"PRIVATE\""
        );
    }

    #[test]
    fn given_unknown_number_when_round_tripping_json_then_number_is_lost() {
        let json = serde_json::to_string(&Visibility::from_i32(7))
            .expect("serialize");
        let back: Visibility = serde_json::from_str(&json).expect("back");

        assert_eq!(json, "\"UNRECOGNIZED\"");
        assert_eq!(back, Visibility::Unrecognized(-1));
        assert_ne!(back, Visibility::from_i32(7));
    }

    #[test]
    fn given_hand_built_known_number_when_comparing_then_matches_member() {
        let value = Visibility::Unrecognized(2);
        let options = visibility_options(&echo);

        assert_eq!(value, Visibility::Protected);
        assert_eq!(value.canonical(), Visibility::Protected);
        assert_eq!(value.as_str(), "PROTECTED");
        assert_eq!(value.label_key(), Some("memo.visibility.protected"));
        assert!(value.is_selectable());
        assert_eq!(
            current_option(&options, value).map(|option| option.value),
            Some(Visibility::Protected)
        );
        assert_ne!(Visibility::Unrecognized(9), Visibility::Unrecognized(10));
    }
}
