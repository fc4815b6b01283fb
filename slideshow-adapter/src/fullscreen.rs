/// A fullscreen API flavor a host environment may expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FullscreenApi {
    Standard,
    Ms,
    Moz,
    Webkit,
}

/// Order in which API flavors are tried, both for entering and for exiting.
pub const FULLSCREEN_FALLBACK_ORDER: [FullscreenApi; 4] = [
    FullscreenApi::Standard,
    FullscreenApi::Ms,
    FullscreenApi::Moz,
    FullscreenApi::Webkit,
];

impl FullscreenApi {
    /// DOM method used on the container to enter fullscreen.
    pub fn request_method(self) -> &'static str {
        match self {
            Self::Standard => "requestFullscreen",
            Self::Ms => "msRequestFullscreen",
            Self::Moz => "mozRequestFullScreen",
            Self::Webkit => "webkitRequestFullscreen",
        }
    }

    /// DOM method used on the document to leave fullscreen.
    pub fn exit_method(self) -> &'static str {
        match self {
            Self::Standard => "exitFullscreen",
            Self::Ms => "msExitFullscreen",
            Self::Moz => "mozCancelFullScreen",
            Self::Webkit => "webkitExitFullscreen",
        }
    }

    /// Document property holding the current fullscreen element.
    pub fn element_property(self) -> &'static str {
        match self {
            Self::Standard => "fullscreenElement",
            Self::Ms => "msFullscreenElement",
            Self::Moz => "mozFullScreenElement",
            Self::Webkit => "webkitFullscreenElement",
        }
    }
}

/// Fullscreen capability of a host.
///
/// Every method has an "unsupported" default, so hosts without fullscreen support implement
/// nothing and the toggle stays inert.
pub trait FullscreenHost {
    /// Whether any element is currently fullscreen (under any API flavor).
    fn is_fullscreen(&self) -> bool {
        false
    }

    fn supports_request(&self, _api: FullscreenApi) -> bool {
        false
    }

    fn request_fullscreen(&mut self, _api: FullscreenApi) {}

    fn supports_exit(&self, _api: FullscreenApi) -> bool {
        false
    }

    fn exit_fullscreen(&mut self, _api: FullscreenApi) {}
}

/// Result of [`toggle_fullscreen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FullscreenToggle {
    Entered(FullscreenApi),
    Exited(FullscreenApi),
    /// No API flavor was available; nothing happened.
    Unsupported,
}

/// Enters fullscreen if nothing is fullscreen, otherwise leaves it, using the first supported
/// API flavor in [`FULLSCREEN_FALLBACK_ORDER`].
pub fn toggle_fullscreen<H: FullscreenHost + ?Sized>(host: &mut H) -> FullscreenToggle {
    if host.is_fullscreen() {
        let Some(api) = FULLSCREEN_FALLBACK_ORDER
            .into_iter()
            .find(|&api| host.supports_exit(api))
        else {
            swarn!("toggle_fullscreen: no exit API available");
            return FullscreenToggle::Unsupported;
        };
        sdebug!(method = api.exit_method(), "exit fullscreen");
        host.exit_fullscreen(api);
        return FullscreenToggle::Exited(api);
    }

    let Some(api) = FULLSCREEN_FALLBACK_ORDER
        .into_iter()
        .find(|&api| host.supports_request(api))
    else {
        sdebug!("toggle_fullscreen: no request API available");
        return FullscreenToggle::Unsupported;
    };
    sdebug!(method = api.request_method(), "request fullscreen");
    host.request_fullscreen(api);
    FullscreenToggle::Entered(api)
}
