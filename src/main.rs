use brain_cart::BrainCartApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "BrainCart",
        options,
        Box::new(|_cc| Ok(Box::new(BrainCartApp::from_embedded()?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    register_service_worker();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no hay document, no se puede arrancar");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("falta el canvas #the_canvas_id");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(BrainCartApp::from_embedded()?))),
            )
            .await;
        if let Err(err) = result {
            log::error!("no se pudo arrancar eframe: {err:?}");
        }
    });
}

// Best effort: si el navegador no tiene service workers, se sigue sin modo offline.
#[cfg(target_arch = "wasm32")]
fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().service_worker().register("/sw.js");
    wasm_bindgen_futures::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => log::info!("service worker registrado"),
            Err(err) => log::warn!("no se pudo registrar el service worker: {err:?}"),
        }
    });
}
