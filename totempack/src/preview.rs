//! 3D skin preview.
//!
//! The viewer itself is external; this module describes how it is set up
//! ([`PreviewSettings`]) and keeps it pointed at the latest username
//! ([`PreviewController`]). Username changes are debounced: the viewer is only
//! reconfigured once input has been quiet for the debounce window, and it is
//! reconfigured in place rather than rebuilt.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::PackResult;
use crate::provider::SkinEndpoints;

/// Quiet period before a username change reaches the viewer.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Viewer animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animation {
    Idle,
    Walking { speed: f32 },
}

/// Initial viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSettings {
    pub skin_url: String,
    pub width: u32,
    pub height: u32,
    pub fov: f32,
    pub zoom: f32,
    pub auto_rotate: bool,
    pub animation: Animation,
}

impl PreviewSettings {
    /// Default settings showing the skin at `skin_url`.
    pub fn new(skin_url: impl Into<String>) -> Self {
        Self {
            skin_url: skin_url.into(),
            width: 400,
            height: 500,
            fov: 70.0,
            zoom: 0.5,
            auto_rotate: true,
            animation: Animation::Walking { speed: 1.0 },
        }
    }

    /// Default settings showing `username`'s skin.
    pub fn for_username(endpoints: &SkinEndpoints, username: &str) -> Self {
        Self::new(endpoints.skin_url(username))
    }
}

/// A 3D skin viewer that can be pointed at a new skin.
pub trait SkinViewer: Send + 'static {
    /// Replace the displayed skin without rebuilding the viewer.
    fn load_skin(&mut self, url: &str);

    /// Release the viewer.
    fn dispose(&mut self);
}

/// Long-lived handle that keeps a viewer in sync with the latest username.
pub struct PreviewController {
    username: watch::Sender<String>,
    task: JoinHandle<()>,
}

impl PreviewController {
    /// Take ownership of `viewer` and start the debounce loop.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<V: SkinViewer>(viewer: V, endpoints: SkinEndpoints, debounce: Duration) -> Self {
        let (tx, rx) = watch::channel(String::new());
        let task = tokio::spawn(run(viewer, endpoints, rx, debounce));
        Self { username: tx, task }
    }

    /// Record the latest username. Earlier values still inside the debounce
    /// window are superseded.
    pub fn set_username(&self, username: impl Into<String>) {
        self.username.send_replace(username.into());
    }

    /// Stop tracking changes and dispose the viewer.
    ///
    /// A change still waiting out its debounce window is discarded.
    pub async fn shutdown(self) -> PackResult<()> {
        drop(self.username);
        self.task.await?;
        Ok(())
    }
}

async fn run<V: SkinViewer>(
    mut viewer: V,
    endpoints: SkinEndpoints,
    mut rx: watch::Receiver<String>,
    debounce: Duration,
) {
    'outer: while rx.changed().await.is_ok() {
        loop {
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        break 'outer;
                    }
                }
                _ = tokio::time::sleep(debounce) => break,
            }
        }

        let username = rx.borrow_and_update().clone();
        let url = endpoints.skin_url(&username);
        debug!(%username, %url, "reconfiguring viewer");
        viewer.load_skin(&url);
    }

    info!("preview closed");
    viewer.dispose();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Load(String),
        Dispose,
    }

    #[derive(Clone, Default)]
    struct RecordingViewer {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl RecordingViewer {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    impl SkinViewer for RecordingViewer {
        fn load_skin(&mut self, url: &str) {
            self.events.lock().unwrap().push(Event::Load(url.to_string()));
        }

        fn dispose(&mut self) {
            self.events.lock().unwrap().push(Event::Dispose);
        }
    }

    fn controller(viewer: &RecordingViewer) -> PreviewController {
        PreviewController::spawn(viewer.clone(), SkinEndpoints::default(), DEFAULT_DEBOUNCE)
    }

    #[test]
    fn test_default_settings() {
        let settings = PreviewSettings::for_username(&SkinEndpoints::default(), "noqx78");
        assert_eq!(settings.skin_url, "https://mineskin.eu/skin/noqx78");
        assert_eq!((settings.width, settings.height), (400, 500));
        assert_eq!(settings.fov, 70.0);
        assert_eq!(settings.zoom, 0.5);
        assert!(settings.auto_rotate);
        assert_eq!(settings.animation, Animation::Walking { speed: 1.0 });
    }

    #[test]
    fn test_settings_json() {
        let json = serde_json::to_value(PreviewSettings::new("http://x/skin/a")).unwrap();
        assert_eq!(json["skin_url"], "http://x/skin/a");
        assert_eq!(json["animation"]["kind"], "walking");
        assert_eq!(json["animation"]["speed"], 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_change_applied_after_quiet_period() {
        let viewer = RecordingViewer::default();
        let preview = controller(&viewer);

        preview.set_username("Steve");
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(viewer.events().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(
            viewer.events(),
            vec![Event::Load("https://mineskin.eu/skin/Steve".to_string())]
        );

        preview.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_changes_coalesce() {
        let viewer = RecordingViewer::default();
        let preview = controller(&viewer);

        for name in ["S", "St", "Ste", "Stev", "Steve"] {
            preview.set_username(name);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(
            viewer.events(),
            vec![Event::Load("https://mineskin.eu/skin/Steve".to_string())]
        );
        preview.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_changes_each_reconfigure() {
        let viewer = RecordingViewer::default();
        let preview = controller(&viewer);

        preview.set_username("Steve");
        tokio::time::sleep(Duration::from_secs(1)).await;
        preview.set_username("Alex");
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(
            viewer.events(),
            vec![
                Event::Load("https://mineskin.eu/skin/Steve".to_string()),
                Event::Load("https://mineskin.eu/skin/Alex".to_string()),
            ]
        );
        preview.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_disposes_and_drops_pending_change() {
        let viewer = RecordingViewer::default();
        let preview = controller(&viewer);

        preview.set_username("Steve");
        tokio::time::sleep(Duration::from_millis(100)).await;
        preview.shutdown().await.unwrap();

        assert_eq!(viewer.events(), vec![Event::Dispose]);
    }
}
