// Region → topic dispatch
// A click on the widget arrives as a Region. The dispatcher looks the region
// up in a static binding table and turns it into an ordered list of Actions;
// the showcase executes them. Nothing here performs side effects itself.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// TOPIC
// ============================================================================

/// Closed set of dashboard subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Coding,
    Certification,
    Status,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Coding, Topic::Certification, Topic::Status];

    pub fn id(self) -> &'static str {
        match self {
            Topic::Coding => "coding",
            Topic::Certification => "certification",
            Topic::Status => "status",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Topic::Coding => "Coding Highlights",
            Topic::Certification => "Certifications",
            Topic::Status => "Present Status",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topic: {0:?}")]
pub struct UnknownTopic(pub String);

impl FromStr for Topic {
    type Err = UnknownTopic;

    /// Accepts the short id or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Topic::ALL
            .into_iter()
            .find(|t| {
                needle.eq_ignore_ascii_case(t.id()) || needle.eq_ignore_ascii_case(t.display_name())
            })
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

// ============================================================================
// REGIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Right,
        CubeFace::Left,
        CubeFace::Top,
        CubeFace::Bottom,
    ];
}

/// A discrete clickable area of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Face(CubeFace),
    Planet(u8),
    /// Call-to-action button shown while no panel is open.
    Shortcut(Topic),
}

/// Static region → topic table, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct RegionBindings {
    table: HashMap<Region, Topic>,
}

impl RegionBindings {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bind(mut self, region: Region, topic: Topic) -> Self {
        self.table.insert(region, topic);
        self
    }

    pub fn topic_of(&self, region: Region) -> Option<Topic> {
        self.table.get(&region).copied()
    }

    pub fn is_bound(&self, region: Region) -> bool {
        self.table.contains_key(&region)
    }

    /// Opposite cube faces share a topic; planets follow the orbit order
    /// coding, status, certification; every topic gets a shortcut.
    pub fn portfolio() -> Self {
        let mut bindings = Self::empty()
            .bind(Region::Face(CubeFace::Front), Topic::Coding)
            .bind(Region::Face(CubeFace::Back), Topic::Coding)
            .bind(Region::Face(CubeFace::Right), Topic::Certification)
            .bind(Region::Face(CubeFace::Left), Topic::Certification)
            .bind(Region::Face(CubeFace::Top), Topic::Status)
            .bind(Region::Face(CubeFace::Bottom), Topic::Status)
            .bind(Region::Planet(0), Topic::Coding)
            .bind(Region::Planet(1), Topic::Status)
            .bind(Region::Planet(2), Topic::Certification);
        for topic in Topic::ALL {
            bindings = bindings.bind(Region::Shortcut(topic), topic);
        }
        bindings
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open an external URL now.
    Navigate(String),
    /// Open an external URL once the delay has elapsed.
    Delay(Duration, String),
    /// Show the topic's dashboard (freezes the widget).
    OpenPanel(Topic),
}

pub struct Dispatcher {
    bindings: RegionBindings,
    navigation: HashMap<Topic, Vec<Action>>,
}

impl Dispatcher {
    pub fn new(bindings: RegionBindings) -> Self {
        Self {
            bindings,
            navigation: HashMap::new(),
        }
    }

    /// External navigation that runs before the panel opens for `topic`.
    pub fn with_navigation(mut self, topic: Topic, actions: Vec<Action>) -> Self {
        self.navigation.insert(topic, actions);
        self
    }

    pub fn bindings(&self) -> &RegionBindings {
        &self.bindings
    }

    pub fn actions_for(&self, topic: Topic) -> Vec<Action> {
        let mut actions = self.navigation.get(&topic).cloned().unwrap_or_default();
        actions.push(Action::OpenPanel(topic));
        actions
    }

    /// Resolve a clicked region. Unbound regions yield no actions.
    pub fn dispatch(&self, region: Region) -> Vec<Action> {
        match self.bindings.topic_of(region) {
            Some(topic) => self.actions_for(topic),
            None => Vec::new(),
        }
    }
}

// ============================================================================
// NAVIGATOR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigateError {
    #[error("refused to open {url}: {reason}")]
    Refused { url: String, reason: String },
}

/// Opens external URLs in a new browsing context. Fire-and-forget.
pub trait Navigator {
    fn open(&mut self, url: &str) -> Result<(), NavigateError>;
}

/// Records opened URLs; can be told to refuse everything.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNavigator {
    pub opened: Vec<String>,
    pub refuse: bool,
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn open(&mut self, url: &str) -> Result<(), NavigateError> {
        if self.refuse {
            return Err(NavigateError::Refused {
                url: url.to_string(),
                reason: "popup blocked".to_string(),
            });
        }
        self.opened.push(url.to_string());
        Ok(())
    }
}
