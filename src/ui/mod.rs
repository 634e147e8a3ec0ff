mod helpers;
pub mod layout;
pub mod views;

use crate::app::{Event, GameSession, Outcome, Transition};
use crate::audio::{SoundPlayer, platform_player};
use crate::config::GameConfig;
use crate::data::read_catalog_embedded;
use crate::error::CatalogError;
use crate::install::{Installer, platform_installer};
use crate::model::Screen;
use crate::timer::OneShotTimer;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, install_banner, top_panel};
use std::time::Duration;

/// La app de eframe: la partida más los adaptadores de sonido e instalación.
pub struct BrainCartApp {
    pub session: GameSession,
    sound: Box<dyn SoundPlayer>,
    installer: Box<dyn Installer>,
    splash_timer: OneShotTimer,
}

impl BrainCartApp {
    pub fn new(
        session: GameSession,
        sound: Box<dyn SoundPlayer>,
        installer: Box<dyn Installer>,
    ) -> Self {
        let splash_timer = OneShotTimer::new(session.config().splash_delay_secs);
        Self {
            session,
            sound,
            installer,
            splash_timer,
        }
    }

    /// Catálogo embebido + adaptadores de la plataforma actual.
    pub fn from_embedded() -> Result<Self, CatalogError> {
        let catalog = read_catalog_embedded()?;
        let session = GameSession::new(catalog, GameConfig::default());
        Ok(Self::new(session, platform_player(), platform_installer()))
    }

    /// Punto único por el que pasan todas las acciones de la interfaz.
    pub fn dispatch(&mut self, event: Event) -> Transition {
        let transition = self.session.handle(event);

        if let Some(cue) = transition.cue {
            if self.session.sound_enabled() {
                self.sound.play(cue);
            }
        }
        if transition.outcome == Outcome::InstallRequested {
            self.installer.request_install();
        }
        transition
    }

    fn drain_install_signals(&mut self) {
        for signal in self.installer.poll() {
            self.dispatch(signal.into_event());
        }
    }

    /// Avanza el temporizador de la pantalla inicial. Devuelve cuánto falta, si sigue en marcha.
    fn tick_splash(&mut self, now: f64) -> Option<f64> {
        if self.session.screen() != Screen::Splash {
            self.splash_timer.cancel();
            return None;
        }
        self.splash_timer.arm(now);
        if self.splash_timer.poll(now) {
            self.dispatch(Event::SplashElapsed);
            return None;
        }
        self.splash_timer.remaining(now)
    }
}

impl App for BrainCartApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.drain_install_signals();

        let now = ctx.input(|i| i.time);
        if let Some(wait) = self.tick_splash(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(wait));
        }

        if self.session.install_banner().should_show() {
            install_banner(self, ctx);
        }

        // HUD solo cuando ya se está jugando
        if !matches!(self.session.screen(), Screen::Splash | Screen::Story) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.session.screen() {
            Screen::Splash => views::splash::ui_splash(self, ctx),
            Screen::Story => views::story::ui_story(self, ctx),
            Screen::LevelSelect => views::level_select::ui_level_select(self, ctx),
            Screen::ShopSelect => views::shop_select::ui_shop_select(self, ctx),
            Screen::Shopping => views::shopping::ui_shopping(self, ctx),
            Screen::LevelComplete => views::level_complete::ui_level_complete(self, ctx),
        }
    }
}
