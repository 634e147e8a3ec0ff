//! Instalación como PWA.
//!
//! El núcleo solo conoce [`InstallBanner`]: si hay diálogo disponible, si el
//! jugador lo ha cerrado y si la app ya está instalada. El mecanismo real vive
//! detrás de [`Installer`], que en la web escucha `beforeinstallprompt` y
//! `appinstalled`, y en escritorio no hace nada.

use crate::app::Event;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallBanner {
    prompt_ready: bool,
    visible: bool,
    installed: bool,
}

impl InstallBanner {
    pub fn should_show(&self) -> bool {
        self.visible && !self.installed
    }

    pub fn can_request(&self) -> bool {
        self.prompt_ready && !self.installed
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn on_available(&mut self) -> bool {
        if self.installed {
            return false;
        }
        let before = *self;
        self.prompt_ready = true;
        self.visible = true;
        before != *self
    }

    /// El diálogo solo se puede usar una vez, acepte o no el jugador.
    pub fn on_accepted(&mut self) -> bool {
        let before = *self;
        self.prompt_ready = false;
        self.visible = false;
        before != *self
    }

    pub fn on_declined(&mut self) -> bool {
        let before = *self;
        self.prompt_ready = false;
        before != *self
    }

    pub fn on_installed(&mut self) -> bool {
        let first_time = !self.installed;
        self.installed = true;
        self.visible = false;
        self.prompt_ready = false;
        first_time
    }

    pub fn dismiss(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }
}

/// Avisos que llegan de la plataforma de forma asíncrona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallSignal {
    PromptAvailable,
    Accepted,
    Declined,
    Installed,
    /// La app ya arrancó instalada: se marca sin celebrarlo.
    AlreadyInstalled,
}

impl InstallSignal {
    pub fn into_event(self) -> Event {
        match self {
            InstallSignal::PromptAvailable => Event::InstallAvailable,
            InstallSignal::Accepted => Event::InstallAccepted,
            InstallSignal::Declined => Event::InstallDeclined,
            InstallSignal::Installed => Event::Installed,
            InstallSignal::AlreadyInstalled => Event::AlreadyInstalled,
        }
    }
}

pub trait Installer {
    /// Vacía la cola de avisos pendientes.
    fn poll(&mut self) -> Vec<InstallSignal>;
    fn request_install(&mut self);
}

/// Escritorio: no hay nada que instalar.
#[derive(Debug, Default)]
pub struct NoInstaller;

impl Installer for NoInstaller {
    fn poll(&mut self) -> Vec<InstallSignal> {
        Vec::new()
    }

    fn request_install(&mut self) {
        log::debug!("install requested but this platform has no install prompt");
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserInstaller;

pub fn platform_installer() -> Box<dyn Installer> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserInstaller::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(NoInstaller)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{InstallSignal, Installer};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, js_sys, spawn_local};

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(extends = web_sys::Event)]
        type BeforeInstallPromptEvent;

        #[wasm_bindgen(method, catch)]
        fn prompt(this: &BeforeInstallPromptEvent) -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(method, getter, js_name = userChoice)]
        fn user_choice(this: &BeforeInstallPromptEvent) -> js_sys::Promise;
    }

    type Listener = Closure<dyn FnMut(web_sys::Event)>;

    pub struct BrowserInstaller {
        signals: Rc<RefCell<Vec<InstallSignal>>>,
        deferred: Rc<RefCell<Option<BeforeInstallPromptEvent>>>,
        listeners: Vec<(&'static str, Listener)>,
    }

    impl BrowserInstaller {
        pub fn new() -> Self {
            let mut installer = Self {
                signals: Rc::default(),
                deferred: Rc::default(),
                listeners: Vec::new(),
            };

            let Some(window) = web_sys::window() else {
                log::warn!("no window available, install prompt disabled");
                return installer;
            };

            // ¿Ya se está ejecutando como app instalada?
            if let Ok(Some(query)) = window.match_media("(display-mode: standalone)") {
                if query.matches() {
                    installer
                        .signals
                        .borrow_mut()
                        .push(InstallSignal::AlreadyInstalled);
                }
            }

            let on_prompt: Listener = {
                let signals = Rc::clone(&installer.signals);
                let deferred = Rc::clone(&installer.deferred);
                Closure::new(move |event: web_sys::Event| {
                    event.prevent_default();
                    *deferred.borrow_mut() = Some(event.unchecked_into());
                    signals.borrow_mut().push(InstallSignal::PromptAvailable);
                })
            };
            let on_installed: Listener = {
                let signals = Rc::clone(&installer.signals);
                Closure::new(move |_event: web_sys::Event| {
                    signals.borrow_mut().push(InstallSignal::Installed);
                })
            };

            for (name, listener) in [
                ("beforeinstallprompt", on_prompt),
                ("appinstalled", on_installed),
            ] {
                if let Err(err) = window
                    .add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
                {
                    log::warn!("could not listen to {name}: {err:?}");
                }
                installer.listeners.push((name, listener));
            }

            installer
        }
    }

    // Sin esto los closures seguirían vivos en el navegador tras cerrar la app.
    impl Drop for BrowserInstaller {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                for (name, listener) in &self.listeners {
                    let callback: &js_sys::Function = listener.as_ref().unchecked_ref();
                    let _ = window.remove_event_listener_with_callback(name, callback);
                }
            }
        }
    }

    impl Installer for BrowserInstaller {
        fn poll(&mut self) -> Vec<InstallSignal> {
            std::mem::take(&mut *self.signals.borrow_mut())
        }

        fn request_install(&mut self) {
            let Some(event) = self.deferred.borrow_mut().take() else {
                return;
            };
            let signals = Rc::clone(&self.signals);

            spawn_local(async move {
                let shown = match event.prompt() {
                    Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                    Err(err) => Err(err),
                };
                if let Err(err) = shown {
                    log::warn!("install prompt failed: {err:?}");
                }

                let signal = match JsFuture::from(event.user_choice()).await {
                    Ok(choice) => {
                        let outcome = js_sys::Reflect::get(&choice, &JsValue::from_str("outcome"))
                            .ok()
                            .and_then(|v| v.as_string());
                        if outcome.as_deref() == Some("accepted") {
                            InstallSignal::Accepted
                        } else {
                            InstallSignal::Declined
                        }
                    }
                    Err(err) => {
                        log::warn!("install choice unavailable: {err:?}");
                        InstallSignal::Declined
                    }
                };
                signals.borrow_mut().push(signal);
            });
        }
    }
}
