use std::{cell::RefCell, rc::Rc};

use tracing::info;
use wasm_bindgen::prelude::*;

use crate::{
    api::HttpWalletApi,
    config::UiConfig,
    errors::ClientError,
    logging,
    page::DomPage,
    ui::WalletUi,
};

type PageUi = WalletUi<HttpWalletApi, DomPage>;

thread_local! {
    static UI: RefCell<Option<Rc<PageUi>>> = RefCell::new(None);
}

/// A default config that cannot be installed (no http origin) is reported
/// on the console; the host page can still call `configure` afterwards.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = install(UiConfig::default()) {
        web_sys::console::error_1(&e);
    }
}

/// Rebuilds the page actions from a config object; omitted keys keep their
/// defaults.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        UiConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| to_js(ClientError::Config(e.to_string())))?
    };
    install(config)
}

#[wasm_bindgen(js_name = generateWallet)]
pub async fn generate_wallet() -> Result<(), JsValue> {
    current()?.generate_wallet().await;
    Ok(())
}

#[wasm_bindgen(js_name = getBalance)]
pub async fn get_balance() -> Result<(), JsValue> {
    current()?.get_balance().await;
    Ok(())
}

#[wasm_bindgen(js_name = sendTransaction)]
pub async fn send_transaction() -> Result<(), JsValue> {
    current()?.send_transaction().await;
    Ok(())
}

fn install(config: UiConfig) -> Result<(), JsValue> {
    config.validate().map_err(to_js)?;
    logging::init(config.level().map_err(to_js)?);

    let page = DomPage::new().map_err(to_js)?;
    let ui = WalletUi::new(HttpWalletApi::from_config(&config), page, config.elements.clone());
    UI.with(|slot| *slot.borrow_mut() = Some(Rc::new(ui)));

    info!(api_base = %config.api_base, "✅ wallet UI ready");
    Ok(())
}

// Each call holds its own Rc, so a reconfigure mid-flight does not cut off
// requests already running.
fn current() -> Result<Rc<PageUi>, JsValue> {
    UI.with(|slot| slot.borrow().clone())
        .ok_or_else(|| to_js(ClientError::Config("wallet UI not initialized".to_string())))
}

fn to_js(err: ClientError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
