//! Main module for the resistor calculator UI built with Yew.
//! Wires the band dropdowns, the band code field and the resistor drawing.

use log::{debug, warn};
use resistor_calculator::{
    BandColor, BandCount, BandSelection, BandSlot, ResistorSpec, Rgba, SLOT_COUNT,
};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod logger;

use components::{render_result, BandCountSelect, BandSelect, ResistorImage};
use config::LOG_LEVEL;
use hooks::use_band_code_input;

/// Primary application component holding the dropdown selection.
#[function_component(App)]
fn app() -> Html {
    let selection = use_state(BandSelection::default);
    let spec = selection.to_spec();

    let on_count_change = {
        let selection = selection.clone();
        Callback::from(move |count: BandCount| {
            let mut next = (*selection).clone();
            next.set_count(count);
            debug!("Band count set to {}", count);
            selection.set(next);
        })
    };

    let on_band_change = {
        let selection = selection.clone();
        Callback::from(move |(slot, color): (BandSlot, BandColor)| {
            let mut next = (*selection).clone();
            match next.set(slot, color) {
                Ok(()) => selection.set(next),
                Err(err) => warn!("Ignoring band change: {}", err),
            }
        })
    };

    let on_band_code = {
        let selection = selection.clone();
        Callback::from(move |parsed: ResistorSpec| {
            debug!("Band code applied: {}", parsed);
            selection.set(BandSelection::from_spec(&parsed));
        })
    };

    let canonical = spec.as_ref().map(ToString::to_string).unwrap_or_default();
    let band_code = use_band_code_input(canonical, on_band_code);

    let (labels, tints) = match &spec {
        Ok(s) => (s.band_labels(), s.band_tints()),
        Err(_) => (
            BandSlot::ALL.map(|_| "-".to_string()),
            [Rgba::TRANSPARENT; SLOT_COUNT],
        ),
    };

    html! {
        <div class="container">
            <h1>{ "Resistor Color Code Calculator" }</h1>

            <div class="top-controls">
                <BandCountSelect count={selection.count()} onchange={on_count_change} />
            </div>

            <ResistorImage tints={tints} />

            <div class="band-controls">
                { BandSlot::ALL.iter().map(|&slot| html! {
                    <BandSelect
                        slot={slot}
                        selected={selection.get(slot)}
                        enabled={selection.is_enabled(slot)}
                        label={labels[slot.index()].clone()}
                        onchange={on_band_change.clone()}
                    />
                }).collect::<Html>() }
            </div>

            <div class="form-group">
                <label for="band_code_input">{ "Band Code:" }</label>
                <input
                    type="text"
                    id="band_code_input"
                    placeholder="e.g. yellow violet red gold"
                    value={band_code.text.clone()}
                    class={if band_code.error.is_some() { "invalid" } else { "" }}
                    oninput={band_code.on_text_input.clone()}
                    onchange={band_code.on_commit.reform(|_: Event| ())}
                />
                if let Some(err) = band_code.error.clone() {
                    <div class="input-error">{ err }</div>
                }
            </div>

            <div class="results-area">
                { render_result(&spec) }
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then renders the app.
fn main() {
    console_error_panic_hook::set_once();
    logger::init(LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}
