//! Tester session state
//!
//! Explicit state for the tester console with a reducer-style [`TesterSession::apply`].
//! Indices are rebuilt wholesale whenever the table or subject changes. Every
//! fetch is tagged with a generation and only completions of the latest issued
//! fetch are applied.

use crate::core::models::curriculum::{CurriculumError, CurriculumTable};
use crate::core::models::tag::Tag;
use crate::core::sequencer::{build_indices, neighbors, CurriculumIndices, Direction};
use crate::{debug, info, warn};
use std::str::FromStr;

/// Where keyboard focus currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Page body or a non-editable control
    Document,
    /// Single-line text input
    TextInput,
    /// Multi-line text area
    TextArea,
    /// Drop-down select
    Select,
}

impl Focus {
    /// Whether arrow keys belong to the focused control rather than navigation
    #[must_use]
    pub const fn captures_arrows(self) -> bool {
        !matches!(self, Self::Document)
    }
}

/// Keys the console reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Left arrow: previous tag
    ArrowLeft,
    /// Right arrow: next tag
    ArrowRight,
    /// Anything else
    Other,
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arrowleft" | "left" | "l" => Ok(Self::ArrowLeft),
            "arrowright" | "right" | "r" => Ok(Self::ArrowRight),
            "" => Err("Empty key".to_string()),
            _ => Ok(Self::Other),
        }
    }
}

/// Navigation state of the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    /// No tag shown
    Idle,
    /// Showing the subtopic with this tag, as received
    Displaying(String),
}

/// User-facing notice shown after a failed or malformed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text
    pub message: String,
    /// Whether a manual retry is offered
    pub retryable: bool,
}

/// Route the host router should open after a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Tag navigated to
    pub tag: Tag,
    /// `/create-questions/<type>?subject=<subject>&tags=<tag>`
    pub url: String,
}

/// Inputs to the session reducer
#[derive(Debug)]
pub enum Action {
    /// Switch subject and rebuild indices from the current table
    SelectSubject(String),
    /// Display a tag directly (e.g. from a query parameter)
    ShowTag(String),
    /// A curriculum fetch is about to be issued
    FetchIssued,
    /// A fetch finished, successfully or with a payload error
    FetchCompleted {
        /// Generation returned by [`Effect::Fetch`]
        generation: u64,
        /// Parsed payload
        result: Result<CurriculumTable, CurriculumError>,
    },
    /// A fetch failed at the transport level
    FetchFailed {
        /// Generation returned by [`Effect::Fetch`]
        generation: u64,
        /// Failure description
        message: String,
    },
    /// Move to the neighboring tag
    Navigate(Direction),
    /// A key was pressed while `focus` had focus
    KeyPressed {
        /// Key pressed
        key: Key,
        /// Focused control
        focus: Focus,
    },
    /// Hide the current notice
    DismissNotice,
}

/// Side effect requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do
    None,
    /// Issue a fetch tagged with `generation`
    Fetch {
        /// Generation to pass back on completion
        generation: u64,
    },
    /// Open the given route
    Navigate(NavigationRequest),
}

/// Build the question-authoring route for `tag`
#[must_use]
pub fn navigation_url(question_type: &str, subject: &str, tag: &Tag) -> String {
    format!("/create-questions/{question_type}?subject={subject}&tags={tag}")
}

/// Tester console state
#[derive(Debug, Clone)]
pub struct TesterSession {
    question_type: String,
    subject: Option<String>,
    table: CurriculumTable,
    indices: CurriculumIndices,
    nav: NavState,
    latest_generation: u64,
    notice: Option<Notice>,
}

impl TesterSession {
    /// Create a session
    ///
    /// # Arguments
    /// * `question_type` - Route segment for navigation URLs (e.g. `mcq`)
    /// * `subject` - Initially selected subject
    /// * `initial_tag` - Tag to display first, if any
    #[must_use]
    pub fn new(question_type: &str, subject: Option<&str>, initial_tag: Option<&str>) -> Self {
        Self {
            question_type: question_type.to_string(),
            subject: subject.map(str::to_string),
            table: CurriculumTable::new(),
            indices: CurriculumIndices::default(),
            nav: initial_tag.map_or(NavState::Idle, |tag| NavState::Displaying(tag.to_string())),
            latest_generation: 0,
            notice: None,
        }
    }

    /// Selected subject
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Latest accepted curriculum table
    #[must_use]
    pub const fn table(&self) -> &CurriculumTable {
        &self.table
    }

    /// Indices for the selected subject
    #[must_use]
    pub const fn indices(&self) -> &CurriculumIndices {
        &self.indices
    }

    /// Navigation state
    #[must_use]
    pub const fn nav(&self) -> &NavState {
        &self.nav
    }

    /// Current notice, if any
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Generation of the latest issued fetch (`0` before any)
    #[must_use]
    pub const fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Topic of the displayed tag, if known
    #[must_use]
    pub fn current_topic(&self) -> Option<&str> {
        match &self.nav {
            NavState::Displaying(tag) => self.indices.topic_for(tag),
            NavState::Idle => None,
        }
    }

    fn rebuild(&mut self) {
        self.indices = self
            .subject
            .as_deref()
            .map_or_else(CurriculumIndices::default, |subject| {
                build_indices(&self.table, subject)
            });
    }

    /// Whether a fetch result should be dropped
    ///
    /// Only the latest issued generation is accepted; older ones are stale and
    /// newer ones were never issued by this session.
    fn is_stale(&self, generation: u64) -> bool {
        if generation == self.latest_generation {
            return false;
        }
        debug!(
            "Dropping fetch #{generation} (latest issued #{})",
            self.latest_generation
        );
        true
    }

    fn navigate(&mut self, direction: Direction) -> Effect {
        let NavState::Displaying(current) = &self.nav else {
            return Effect::None;
        };
        let Some(tag) = neighbors(current, &self.indices).toward(direction) else {
            debug!("No {direction} tag from '{current}'");
            return Effect::None;
        };
        self.nav = NavState::Displaying(tag.to_string());
        let subject = self.subject.as_deref().unwrap_or_default();
        Effect::Navigate(NavigationRequest {
            tag,
            url: navigation_url(&self.question_type, subject, &tag),
        })
    }

    /// Apply one action and return the side effect it requests
    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::SelectSubject(subject) => {
                info!("Subject selected: {subject}");
                self.subject = Some(subject);
                self.nav = NavState::Idle;
                self.rebuild();
                Effect::None
            }
            Action::ShowTag(tag) => {
                self.nav = NavState::Displaying(tag);
                Effect::None
            }
            Action::FetchIssued => {
                self.latest_generation += 1;
                Effect::Fetch {
                    generation: self.latest_generation,
                }
            }
            Action::FetchCompleted { generation, result } => {
                if self.is_stale(generation) {
                    return Effect::None;
                }
                match result {
                    Ok(table) => {
                        self.table = table;
                        self.notice = None;
                        self.rebuild();
                    }
                    Err(e) => {
                        warn!("Curriculum payload rejected: {e}");
                        self.notice = Some(Notice {
                            message: format!("Could not load curriculum: {e}"),
                            retryable: true,
                        });
                    }
                }
                Effect::None
            }
            Action::FetchFailed {
                generation,
                message,
            } => {
                if !self.is_stale(generation) {
                    warn!("Curriculum fetch failed: {message}");
                    self.notice = Some(Notice {
                        message,
                        retryable: true,
                    });
                }
                Effect::None
            }
            Action::Navigate(direction) => self.navigate(direction),
            Action::KeyPressed { key, focus } => {
                if focus.captures_arrows() {
                    return Effect::None;
                }
                match key {
                    Key::ArrowLeft => self.navigate(Direction::Prev),
                    Key::ArrowRight => self.navigate(Direction::Next),
                    Key::Other => Effect::None,
                }
            }
            Action::DismissNotice => {
                self.notice = None;
                Effect::None
            }
        }
    }
}
