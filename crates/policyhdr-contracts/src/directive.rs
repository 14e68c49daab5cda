//! The directive catalog and per-directive parameters.
//!
//! `DirectiveName` is the closed set of browser capabilities a policy header
//! may mention. `DirectiveParameters` is the caller-facing access policy for
//! one directive, and `ResolvedDirective` is that policy after conflicting
//! flags have been collapsed to a single form.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// A supported policy-controlled feature.
///
/// `as_str` gives the on-the-wire directive name:
/// `DirectiveName::ScreenWakeLock` is `"screen-wake-lock"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveName {
    Accelerometer,
    AmbientLightSensor,
    Autoplay,
    Battery,
    Camera,
    DisplayCapture,
    DocumentDomain,
    EncryptedMedia,
    ExecutionWhileNotRendered,
    ExecutionWhileOutOfViewport,
    Fullscreen,
    Geolocation,
    Gyroscope,
    LayoutAnimations,
    LegacyImageFormats,
    Magnetometer,
    Microphone,
    Midi,
    NavigationOverride,
    OversizedImages,
    Payment,
    PictureInPicture,
    PublickeyCredentialsGet,
    SyncXhr,
    Usb,
    Vr,
    WakeLock,
    ScreenWakeLock,
    WebShare,
    XrSpatialTracking,
}

impl DirectiveName {
    /// Every supported directive, in catalog order.
    pub const ALL: [DirectiveName; 30] = [
        DirectiveName::Accelerometer,
        DirectiveName::AmbientLightSensor,
        DirectiveName::Autoplay,
        DirectiveName::Battery,
        DirectiveName::Camera,
        DirectiveName::DisplayCapture,
        DirectiveName::DocumentDomain,
        DirectiveName::EncryptedMedia,
        DirectiveName::ExecutionWhileNotRendered,
        DirectiveName::ExecutionWhileOutOfViewport,
        DirectiveName::Fullscreen,
        DirectiveName::Geolocation,
        DirectiveName::Gyroscope,
        DirectiveName::LayoutAnimations,
        DirectiveName::LegacyImageFormats,
        DirectiveName::Magnetometer,
        DirectiveName::Microphone,
        DirectiveName::Midi,
        DirectiveName::NavigationOverride,
        DirectiveName::OversizedImages,
        DirectiveName::Payment,
        DirectiveName::PictureInPicture,
        DirectiveName::PublickeyCredentialsGet,
        DirectiveName::SyncXhr,
        DirectiveName::Usb,
        DirectiveName::Vr,
        DirectiveName::WakeLock,
        DirectiveName::ScreenWakeLock,
        DirectiveName::WebShare,
        DirectiveName::XrSpatialTracking,
    ];

    /// The directive name as it appears in a header value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveName::Accelerometer => "accelerometer",
            DirectiveName::AmbientLightSensor => "ambient-light-sensor",
            DirectiveName::Autoplay => "autoplay",
            DirectiveName::Battery => "battery",
            DirectiveName::Camera => "camera",
            DirectiveName::DisplayCapture => "display-capture",
            DirectiveName::DocumentDomain => "document-domain",
            DirectiveName::EncryptedMedia => "encrypted-media",
            DirectiveName::ExecutionWhileNotRendered => "execution-while-not-rendered",
            DirectiveName::ExecutionWhileOutOfViewport => "execution-while-out-of-viewport",
            DirectiveName::Fullscreen => "fullscreen",
            DirectiveName::Geolocation => "geolocation",
            DirectiveName::Gyroscope => "gyroscope",
            DirectiveName::LayoutAnimations => "layout-animations",
            DirectiveName::LegacyImageFormats => "legacy-image-formats",
            DirectiveName::Magnetometer => "magnetometer",
            DirectiveName::Microphone => "microphone",
            DirectiveName::Midi => "midi",
            DirectiveName::NavigationOverride => "navigation-override",
            DirectiveName::OversizedImages => "oversized-images",
            DirectiveName::Payment => "payment",
            DirectiveName::PictureInPicture => "picture-in-picture",
            DirectiveName::PublickeyCredentialsGet => "publickey-credentials-get",
            DirectiveName::SyncXhr => "sync-xhr",
            DirectiveName::Usb => "usb",
            DirectiveName::Vr => "vr",
            DirectiveName::WakeLock => "wake-lock",
            DirectiveName::ScreenWakeLock => "screen-wake-lock",
            DirectiveName::WebShare => "web-share",
            DirectiveName::XrSpatialTracking => "xr-spatial-tracking",
        }
    }
}

impl fmt::Display for DirectiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `DirectiveName::from_str` for names outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown directive '{0}'")]
pub struct UnknownDirective(pub String);

impl FromStr for DirectiveName {
    type Err = UnknownDirective;

    /// Exact, case-sensitive lookup against the catalog.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DirectiveName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownDirective(s.to_string()))
    }
}

/// Return true if `name` is a member of the directive catalog.
pub fn is_supported_directive(name: &str) -> bool {
    name.parse::<DirectiveName>().is_ok()
}

/// The access policy for a single directive.
///
/// Fields may conflict; `resolve` collapses them with the priority
/// `none > all > self/origins`.
///
/// Example in TOML:
/// ```toml
/// camera = { none = true }
/// autoplay = { self = true, origins = ["https://cdn.example.com"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DirectiveParameters {
    /// Deny the feature everywhere.
    pub none: bool,

    /// Allow the feature everywhere.
    pub all: bool,

    /// Allow the feature for the document's own origin.
    #[serde(rename = "self")]
    pub include_self: bool,

    /// Allow the feature for these origins. An empty list is the same as
    /// no list.
    pub origins: Vec<String>,
}

impl DirectiveParameters {
    /// Parameters that deny the feature everywhere.
    pub fn none() -> Self {
        Self { none: true, ..Self::default() }
    }

    /// Parameters that allow the feature everywhere.
    pub fn all() -> Self {
        Self { all: true, ..Self::default() }
    }

    /// Parameters that allow the feature for the document's own origin only.
    pub fn self_only() -> Self {
        Self { include_self: true, ..Self::default() }
    }

    /// Parameters that allow the feature for an explicit origin list.
    pub fn origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Also allow the document's own origin.
    pub fn with_self(mut self) -> Self {
        self.include_self = true;
        self
    }

    /// Append origins to the allow-list.
    pub fn with_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins.extend(origins.into_iter().map(Into::into));
        self
    }

    /// Collapse the parameters to the single form that will be rendered.
    ///
    /// First match wins: `none`, then `all`, then `self` and/or `origins`.
    /// Returns `None` when nothing is selected.
    pub fn resolve(&self) -> Option<ResolvedDirective<'_>> {
        if self.none {
            return Some(ResolvedDirective::None);
        }
        if self.all {
            return Some(ResolvedDirective::All);
        }
        if !self.include_self && self.origins.is_empty() {
            return None;
        }
        Some(ResolvedDirective::SelfOrigins {
            include_self: self.include_self,
            origins: &self.origins,
        })
    }
}

/// A directive's parameters after priority resolution.
///
/// Serializers render this, never the raw parameters, so every syntax agrees
/// on which flag wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDirective<'a> {
    /// Feature denied everywhere.
    None,

    /// Feature allowed everywhere.
    All,

    /// Feature allowed for self and/or an origin list. At least one of the
    /// two is present: `include_self` is true or `origins` is non-empty.
    SelfOrigins {
        include_self: bool,
        origins: &'a [String],
    },
}
