use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::Callback;

pub trait InputExt {
	fn input_value(&self) -> Option<String>;
	fn input_checked(&self) -> Option<bool>;
}

impl InputExt for web_sys::Event {
	fn input_value(&self) -> Option<String> {
		Some(input_element(self)?.value())
	}

	fn input_checked(&self) -> Option<bool> {
		Some(input_element(self)?.checked())
	}
}

fn input_element(event: &web_sys::Event) -> Option<HtmlInputElement> {
	event.target()?.dyn_into::<HtmlInputElement>().ok()
}

pub trait CallbackOptExt<IN> {
	/// Builds a callback that maps its input and emits to `self` only when the mapping yields a value.
	fn reform_some<T, F>(&self, func: F) -> Callback<T>
	where
		F: Fn(T) -> Option<IN> + 'static,
		T: 'static;
}

impl<IN> CallbackOptExt<IN> for Callback<IN>
where
	IN: 'static,
{
	fn reform_some<T, F>(&self, func: F) -> Callback<T>
	where
		F: Fn(T) -> Option<IN> + 'static,
		T: 'static,
	{
		let callback = self.clone();
		Callback::from(move |input: T| {
			if let Some(value) = func(input) {
				callback.emit(value);
			}
		})
	}
}
