use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::install::InstallBanner;
use crate::model::{Screen, ShopId, SoundCue};

// Submódulos
pub mod cart;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod rewards;
pub mod view_models;

pub use cart::{CartSession, PendingRiddle};
pub use progress::ProgressTracker;
pub use rewards::RewardLedger;

// Re-export de view models
pub use crate::view_models::{HudInfo, ItemRow, LevelTile, ShopCard};

/// Todo lo que la interfaz (o un temporizador) le puede pedir a la partida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SplashElapsed,
    StartAdventure,
    SelectLevel(u32),
    SelectShop(ShopId),
    Back,
    AddItem(String),
    EditAnswer(String),
    SubmitAnswer,
    CancelRiddle,
    Checkout,
    Continue,
    ToggleSound,
    InstallAvailable,
    InstallAccepted,
    InstallDeclined,
    Installed,
    AlreadyInstalled,
    DismissInstall,
    RequestInstall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Cambio de pantalla.
    Moved,
    RiddleOpened,
    AnswerEdited,
    Correct { item: String, coins: u32 },
    Incorrect { item: String },
    RiddleCancelled,
    LevelUnlocked(u32),
    SoundToggled(bool),
    /// La shell debe lanzar el diálogo de instalación de la plataforma.
    InstallRequested,
    BannerChanged,
    /// Evento que no aplica al estado actual: nada cambia.
    Ignored,
}

/// Resultado de `GameSession::handle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub screen: Screen,
    pub outcome: Outcome,
    pub cue: Option<SoundCue>,
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        self.outcome == Outcome::Ignored
    }
}

/// Estado completo de una partida. Vive solo en memoria.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) screen: Screen,
    pub(crate) progress: ProgressTracker,
    pub(crate) rewards: RewardLedger,
    pub(crate) cart: CartSession,
    pub(crate) install: InstallBanner,
    pub(crate) sound_enabled: bool,
    catalog: Catalog,
    config: GameConfig,
}

impl GameSession {
    pub fn new(catalog: Catalog, config: GameConfig) -> Self {
        Self {
            screen: Screen::Splash,
            progress: ProgressTracker::new(config.max_level),
            rewards: RewardLedger::new(config.points_per_answer, config.stars_per_answer),
            cart: CartSession::default(),
            install: InstallBanner::default(),
            sound_enabled: config.sound_enabled,
            catalog,
            config,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn rewards(&self) -> &RewardLedger {
        &self.rewards
    }

    pub fn cart(&self) -> &CartSession {
        &self.cart
    }

    pub fn install_banner(&self) -> &InstallBanner {
        &self.install
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }
}
