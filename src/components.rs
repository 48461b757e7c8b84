//! Pure Yew view components for the calculator UI.
//!
//! Components here render from props only; all state lives in `main.rs`.

use crate::config::*;
use log::warn;
use resistor_calculator::{
    colors_for, BandColor, BandCount, BandSlot, ResistorSpec, Rgba, SpecError, SLOT_COUNT,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Dropdown choosing between four, five and six bands.
#[derive(Properties, PartialEq)]
pub struct BandCountSelectProps {
    pub count: BandCount,
    pub onchange: Callback<BandCount>,
}

#[function_component(BandCountSelect)]
pub fn band_count_select(props: &BandCountSelectProps) -> Html {
    let onchange = {
        let on_count = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<usize>().ok().and_then(BandCount::from_index) {
                Some(count) => on_count.emit(count),
                _ => warn!("Unexpected band count option '{}'", select.value()),
            }
        })
    };

    html! {
        <div class="form-group">
            <label for="band_count">{ "Band Count:" }</label>
            <select id="band_count" {onchange}>
                { BandCount::ALL.iter().map(|&count| html! {
                    <option value={count.index().to_string()} selected={count == props.count}>
                        { count.to_string() }
                    </option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Color dropdown for one band slot, with the decoded value beside it.
#[derive(Properties, PartialEq)]
pub struct BandSelectProps {
    pub slot: BandSlot,
    pub selected: BandColor,
    pub enabled: bool,
    pub label: String,
    pub onchange: Callback<(BandSlot, BandColor)>,
}

#[function_component(BandSelect)]
pub fn band_select(props: &BandSelectProps) -> Html {
    let slot = props.slot;
    let onchange = {
        let on_band = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<BandColor>() {
                Ok(color) => on_band.emit((slot, color)),
                Err(err) => warn!("{}", err),
            }
        })
    };
    let id = format!("band_{}", slot.index() + 1);

    html! {
        <div class={classes!("form-group", "band-select", (!props.enabled).then_some("disabled"))}>
            <label for={id.clone()}>{ format!("{}:", slot.title()) }</label>
            <select id={id} disabled={!props.enabled} {onchange}>
                { colors_for(slot.role()).into_iter().map(|color| html! {
                    <option value={color.name()} selected={color == props.selected}>
                        { color.name() }
                    </option>
                }).collect::<Html>() }
            </select>
            <span class="band-value">{ props.label.clone() }</span>
        </div>
    }
}

/// Schematic resistor whose bands are painted with `tints`.
#[derive(Properties, PartialEq)]
pub struct ResistorImageProps {
    pub tints: [Rgba; SLOT_COUNT],
}

#[function_component(ResistorImage)]
pub fn resistor_image(props: &ResistorImageProps) -> Html {
    html! {
        <svg class="resistor-image"
            viewBox={format!("0 0 {} {}", IMAGE_WIDTH, IMAGE_HEIGHT)}
            width={IMAGE_WIDTH.to_string()}
            height={IMAGE_HEIGHT.to_string()}
        >
            <line
                x1="0"
                y1={LEAD_Y.to_string()}
                x2={IMAGE_WIDTH.to_string()}
                y2={LEAD_Y.to_string()}
                stroke={LEAD_COLOR}
                stroke-width={LEAD_WIDTH.to_string()}
            />
            <rect
                x={BODY_X.to_string()}
                y={BODY_Y.to_string()}
                width={BODY_WIDTH.to_string()}
                height={BODY_HEIGHT.to_string()}
                rx={BODY_RADIUS.to_string()}
                fill={BODY_COLOR}
            />
            { BandSlot::ALL.iter().map(|slot| html! {
                <rect
                    x={BAND_X[slot.index()].to_string()}
                    y={BODY_Y.to_string()}
                    width={BAND_WIDTH.to_string()}
                    height={BODY_HEIGHT.to_string()}
                    fill={props.tints[slot.index()].to_css()}
                />
            }).collect::<Html>() }
        </svg>
    }
}

/// Renders the resistance, tolerance and temperature coefficient lines.
pub fn render_result(result: &Result<ResistorSpec, SpecError>) -> Html {
    let spec = match result {
        Ok(spec) => spec,
        Err(err) => {
            return html! {
                <div class="results">
                    <p class="current-error">{ err.to_string() }</p>
                </div>
            };
        }
    };
    let value = spec.value();

    html! {
        <div class="results">
            <div class="resistance">{ value.resistance_text() }</div>
            <div class="tolerance">{ value.tolerance_text() }</div>
            if let Some(ppm) = value.ppm_text() {
                <div class="ppm">{ ppm }</div>
            }
            <div class="summary">{ spec.to_string() }</div>
        </div>
    }
}
