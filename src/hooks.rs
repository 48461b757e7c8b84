use gloo_timers::callback::Timeout;
use resistor_calculator::ResistorSpec;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::DEBOUNCE_MS;

/// Holds the state and callbacks for the band code text field.
#[derive(Clone)]
pub struct BandCodeInput {
    /// The current text content of the input field.
    pub text: String,
    /// Why the last committed text was rejected, if it was.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the text and
    /// schedules a commit once typing pauses.
    pub on_text_input: Callback<InputEvent>,
    /// Parses the current text right away. Used with `onchange`.
    pub on_commit: Callback<()>,
}

/// Custom hook for the band code field.
///
/// `canonical` is the band code of the resistor currently shown; the text is
/// reset to it whenever it changes (dropdown edits, or a committed code being
/// normalized). Codes that parse are handed to `on_valid`.
#[hook]
pub fn use_band_code_input(canonical: String, on_valid: Callback<ResistorSpec>) -> BandCodeInput {
    let initial_text = canonical.clone();
    let text_state_handle: UseStateHandle<String> = use_state(move || initial_text);
    let error_state_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);
    // Dropping a pending timeout cancels it.
    let pending_commit = use_mut_ref(|| None::<Timeout>);

    let commit = {
        let text_setter = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        Callback::from(move |text: String| match text.parse::<ResistorSpec>() {
            Ok(spec) => {
                // Normalize the spelling even when the resistor is unchanged.
                text_setter.set(spec.to_string());
                error_setter.set(None);
                on_valid.emit(spec);
            }
            Err(err) => error_setter.set(Some(err.to_string())),
        })
    };

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        let pending_commit = pending_commit.clone();
        let commit = commit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            text_setter.set(text.clone());

            let commit = commit.clone();
            let handle = Timeout::new(DEBOUNCE_MS, move || commit.emit(text));
            *pending_commit.borrow_mut() = Some(handle);
        })
    };

    let on_commit = {
        let current_text_handle = text_state_handle.clone();
        Callback::from(move |_: ()| {
            pending_commit.borrow_mut().take();
            commit.emit((*current_text_handle).clone());
        })
    };

    {
        let text_setter = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        use_effect_with(canonical, move |canonical| {
            text_setter.set(canonical.clone());
            error_setter.set(None);
            || ()
        });
    }

    BandCodeInput {
        text: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text_input,
        on_commit,
    }
}
