//! Efectos de sonido. Cada [`SoundCue`] es un tono corto de oscilador.
//!
//! Reproducir es siempre "best effort": si falla se registra y se sigue.

use crate::model::SoundCue;

/// Descripción de un tono: frecuencia (con barrido opcional) y envolvente de volumen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub start_hz: f32,
    /// Frecuencia final y segundos que tarda en llegar
    pub sweep: Option<(f32, f64)>,
    pub gain: f32,
    pub fade_to: f32,
    pub duration: f64,
}

impl ToneSpec {
    pub fn for_cue(cue: SoundCue) -> Self {
        match cue {
            SoundCue::Click => ToneSpec {
                start_hz: 800.0,
                sweep: None,
                gain: 0.3,
                fade_to: 0.01,
                duration: 0.1,
            },
            SoundCue::Success => ToneSpec {
                start_hz: 523.25,
                sweep: Some((783.99, 0.2)),
                gain: 0.3,
                fade_to: 0.01,
                duration: 0.3,
            },
            SoundCue::Error => ToneSpec {
                start_hz: 200.0,
                sweep: None,
                gain: 0.3,
                fade_to: 0.01,
                duration: 0.2,
            },
            SoundCue::Coin => ToneSpec {
                start_hz: 1000.0,
                sweep: Some((2000.0, 0.1)),
                gain: 0.2,
                fade_to: 0.01,
                duration: 0.15,
            },
        }
    }
}

pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Escritorio: sin backend de audio, solo deja constancia en el log.
#[derive(Debug, Default)]
pub struct LogOnlyPlayer;

impl SoundPlayer for LogOnlyPlayer {
    fn play(&mut self, cue: SoundCue) {
        let tone = ToneSpec::for_cue(cue);
        log::debug!("cue {cue:?}: {} Hz for {}s", tone.start_hz, tone.duration);
    }
}

/// Qué hacer con el `AudioContext` guardado antes de programar un tono.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Use,
    /// El navegador lo deja suspendido si se creó sin gesto del jugador.
    Resume,
    Recreate,
}

impl ContextAction {
    pub fn for_state(state: web_sys::AudioContextState) -> Self {
        use web_sys::AudioContextState;
        match state {
            AudioContextState::Suspended => ContextAction::Resume,
            AudioContextState::Closed => ContextAction::Recreate,
            _ => ContextAction::Use,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudioPlayer;

pub fn platform_player() -> Box<dyn SoundPlayer> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(WebAudioPlayer::default())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(LogOnlyPlayer)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{ContextAction, SoundPlayer, ToneSpec};
    use crate::model::SoundCue;
    use wasm_bindgen::JsValue;
    use web_sys::AudioContext;

    /// Web Audio API. El contexto se crea en el primer sonido, que puede
    /// llegar sin gesto del jugador (el de la pantalla inicial); en ese caso
    /// nace suspendido y se reanuda en cada tono posterior hasta que el
    /// navegador lo deja sonar.
    #[derive(Default)]
    pub struct WebAudioPlayer {
        context: Option<AudioContext>,
    }

    impl WebAudioPlayer {
        fn context(&mut self) -> Result<&AudioContext, JsValue> {
            let action = self
                .context
                .as_ref()
                .map(|ctx| ContextAction::for_state(ctx.state()));

            match action {
                None | Some(ContextAction::Recreate) => {
                    self.context = Some(AudioContext::new()?);
                }
                Some(ContextAction::Resume) => {
                    if let Some(ctx) = &self.context {
                        // La promesa se ignora: si no se puede reanudar aún, este tono no suena
                        if let Err(err) = ctx.resume() {
                            log::debug!("audio context still suspended: {err:?}");
                        }
                    }
                }
                Some(ContextAction::Use) => {}
            }

            self.context
                .as_ref()
                .ok_or_else(|| JsValue::from_str("audio context unavailable"))
        }

        fn schedule(&mut self, tone: ToneSpec) -> Result<(), JsValue> {
            let ctx = self.context()?;
            let oscillator = ctx.create_oscillator()?;
            let gain = ctx.create_gain()?;
            oscillator.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&ctx.destination())?;

            let now = ctx.current_time();
            oscillator.frequency().set_value(tone.start_hz);
            gain.gain().set_value_at_time(tone.gain, now)?;
            oscillator.start_with_when(now)?;
            if let Some((end_hz, secs)) = tone.sweep {
                oscillator
                    .frequency()
                    .exponential_ramp_to_value_at_time(end_hz, now + secs)?;
            }
            gain.gain()
                .exponential_ramp_to_value_at_time(tone.fade_to, now + tone.duration)?;
            oscillator.stop_with_when(now + tone.duration)?;
            Ok(())
        }
    }

    impl SoundPlayer for WebAudioPlayer {
        fn play(&mut self, cue: SoundCue) {
            if let Err(err) = self.schedule(ToneSpec::for_cue(cue)) {
                log::warn!("could not play {cue:?}: {err:?}");
            }
        }
    }
}
