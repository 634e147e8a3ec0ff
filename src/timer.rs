// src/timer.rs

/// Temporizador de un solo disparo sobre el reloj de egui (segundos en f64).
/// Si la app se cierra antes de que venza, se va con ella y no dispara nunca.
#[derive(Debug, Clone, PartialEq)]
pub struct OneShotTimer {
    delay: f64,
    armed_at: Option<f64>,
    fired: bool,
}

impl OneShotTimer {
    pub fn new(delay: f64) -> Self {
        Self {
            delay,
            armed_at: None,
            fired: false,
        }
    }

    /// Arranca la cuenta si no estaba ya en marcha.
    pub fn arm(&mut self, now: f64) {
        if self.armed_at.is_none() && !self.fired {
            self.armed_at = Some(now);
        }
    }

    pub fn cancel(&mut self) {
        self.armed_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// `true` una única vez, cuando ha pasado el retardo.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.armed_at {
            Some(start) if now - start >= self.delay => {
                self.armed_at = None;
                self.fired = true;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.armed_at
            .map(|start| (self.delay - (now - start)).max(0.0))
    }
}
