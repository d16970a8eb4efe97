pub mod web_ext;

/// Runs a future on the browser's event loop, logging its error under `target` if it fails.
pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

/// Shows a blocking browser alert.
pub fn alert(message: impl std::fmt::Display) {
	if let Err(err) = gloo_utils::window().alert_with_message(&message.to_string()) {
		log::error!(target: "users-console", "failed to show alert: {err:?}");
	}
}
