//! Expandable string enums: known service values get variants, anything else
//! is kept verbatim in `Other` so newer service versions still round-trip.
//!
//! ```rust
//! use fresource::ElasticSanPublicNetworkAccess;
//!
//! assert_eq!(
//!     ElasticSanPublicNetworkAccess::from("enabled"),
//!     ElasticSanPublicNetworkAccess::Enabled
//! );
//! assert_eq!(ElasticSanPublicNetworkAccess::from("Partial").as_str(), "Partial");
//! ```

use std::fmt::{Display, Formatter};

macro_rules! expandable_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $(
                    if value.eq_ignore_ascii_case($value) {
                        return Self::$variant;
                    }
                )+
                Self::Other(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

expandable_string_enum! {
    ElasticSanSkuName {
        PremiumLrs => "Premium_LRS",
        PremiumZrs => "Premium_ZRS",
    }
}

expandable_string_enum! {
    ElasticSanSkuTier {
        Premium => "Premium",
    }
}

expandable_string_enum! {
    /// Set by the service.
    ElasticSanProvisioningState {
        Invalid => "Invalid",
        Succeeded => "Succeeded",
        Failed => "Failed",
        Canceled => "Canceled",
        Pending => "Pending",
        Creating => "Creating",
        Updating => "Updating",
        Deleting => "Deleting",
        Deleted => "Deleted",
        Restoring => "Restoring",
        SoftDeleting => "SoftDeleting",
    }
}

expandable_string_enum! {
    ElasticSanPublicNetworkAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

expandable_string_enum! {
    AutoScalePolicyEnforcement {
        None => "None",
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}
