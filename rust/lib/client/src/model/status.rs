//! Status lifecycles. The backend stores Arabic labels; each status also
//! accepts a short English alias when parsed, for command-line use.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} status: {value}")]
pub struct StatusParseError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal, $alias:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Wire label, as stored by the backend.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn alias(&self) -> &'static str {
                match self {
                    $($name::$variant => $alias,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = StatusParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s || v.alias().eq_ignore_ascii_case(s))
                    .ok_or_else(|| StatusParseError {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(de::Error::custom)
            }
        }
    };
}

status_enum! {
    /// Lifecycle of dental contracts and direct-purchase orders:
    /// new → approved → contracted → delivered, or rejected.
    ProcurementStatus {
        New => "جديد", "new";
        Approved => "موافق عليه", "approved";
        Contracted => "تم التعاقد", "contracted";
        Delivered => "تم التسليم", "delivered";
        Rejected => "مرفوض", "rejected";
    }
}

impl ProcurementStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcurementStatus::Delivered | ProcurementStatus::Rejected)
    }

    /// Forward step offered from this status, if any.
    pub fn next(&self) -> Option<ProcurementStatus> {
        match self {
            ProcurementStatus::New => Some(ProcurementStatus::Approved),
            ProcurementStatus::Approved => Some(ProcurementStatus::Contracted),
            ProcurementStatus::Contracted => Some(ProcurementStatus::Delivered),
            ProcurementStatus::Delivered | ProcurementStatus::Rejected => None,
        }
    }
}

status_enum! {
    /// Administrative correspondence: open until completed or rejected.
    TransactionStatus {
        InProgress => "مفتوح تحت الاجراء", "open";
        Completed => "منجز", "completed";
        Rejected => "مرفوض", "rejected";
    }
}

impl TransactionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::InProgress)
    }
}

status_enum! {
    /// Maintenance/incident tickets.
    ReportStatus {
        Open => "مفتوح", "open";
        Closed => "مغلق", "closed";
        Scrapped => "مكهن", "scrapped";
    }
}

impl ReportStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReportStatus::Open)
    }
}

status_enum! {
    /// Operational state of a dental device.
    AssetStatus {
        Working => "يعمل", "working";
        OutOfService => "معطل", "broken";
        UnderMaintenance => "تحت الصيانة", "maintenance";
        Scrapped => "مكهن", "scrapped";
    }
}

impl AssetStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AssetStatus::Scrapped)
    }
}
