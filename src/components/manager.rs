use leptos::*;

use crate::api::use_server_link;
use crate::models::{FanSpeed, FeeSchedule, Mode, OperatingParameters, ParameterSet, TemperatureRange};
use crate::store::use_store;

/// Raw text of the manager form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterForm {
    pub lowest: String,
    pub highest: String,
    pub low_fee: String,
    pub medium_fee: String,
    pub high_fee: String,
    pub default_temperature: String,
    pub fan_speed: FanSpeed,
    pub mode: Mode,
}

/// Text fields of the manager form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Lowest,
    Highest,
    LowFee,
    MediumFee,
    HighFee,
    DefaultTemperature,
}

impl ParameterForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Lowest => &self.lowest,
            FormField::Highest => &self.highest,
            FormField::LowFee => &self.low_fee,
            FormField::MediumFee => &self.medium_fee,
            FormField::HighFee => &self.high_fee,
            FormField::DefaultTemperature => &self.default_temperature,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Lowest => &mut self.lowest,
            FormField::Highest => &mut self.highest,
            FormField::LowFee => &mut self.low_fee,
            FormField::MediumFee => &mut self.medium_fee,
            FormField::HighFee => &mut self.high_fee,
            FormField::DefaultTemperature => &mut self.default_temperature,
        }
    }

    /// Prefill from the values already in the store
    pub fn from_parameters(p: &OperatingParameters) -> Self {
        let text = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
        Self {
            lowest: text(p.temperature_range.map(|r| r.min)),
            highest: text(p.temperature_range.map(|r| r.max)),
            low_fee: text(p.fee_schedule.map(|f| f.low)),
            medium_fee: text(p.fee_schedule.map(|f| f.medium)),
            high_fee: text(p.fee_schedule.map(|f| f.high)),
            default_temperature: text(p.default_temperature),
            fan_speed: p.default_fan_speed.unwrap_or_default(),
            mode: p.mode.unwrap_or_default(),
        }
    }

    /// Parse every field; range and fee ordering are checked by the store
    pub fn parse(&self) -> Result<ParameterSet, String> {
        Ok(ParameterSet {
            temperature_range: TemperatureRange {
                min: parse_number("Lowest temperature", &self.lowest)?,
                max: parse_number("Highest temperature", &self.highest)?,
            },
            fee_schedule: FeeSchedule {
                low: parse_number("Low speed fee", &self.low_fee)?,
                medium: parse_number("Medium speed fee", &self.medium_fee)?,
                high: parse_number("High speed fee", &self.high_fee)?,
            },
            default_temperature: parse_number("Default temperature", &self.default_temperature)?,
            default_fan_speed: self.fan_speed,
            mode: self.mode,
        })
    }
}

fn parse_number(label: &str, raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format!("{} is required", label));
    }
    raw.parse()
        .map_err(|_| format!("{} must be a number, got {:?}", label, raw))
}

/// Manager view: configure the central unit and push the configuration
#[component]
pub fn Manager() -> impl IntoView {
    let store = use_store();
    let link = use_server_link();

    let form = create_rw_signal(store.with_untracked(|s| ParameterForm::from_parameters(s.snapshot())));
    let (error, set_error) = create_signal(None::<String>);

    // The store is only updated once the central unit accepts the set
    let push = create_action(move |set: &ParameterSet| {
        let set = *set;
        async move { link.push_parameters(set).await }
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().parse() {
            Ok(set) => {
                set_error.set(None);
                push.dispatch(set);
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    let status = move || match push.value().get() {
        Some(Ok(())) => Some(view! { <div class="info-box">"Parameters sent to the central unit"</div> }.into_view()),
        Some(Err(e)) => Some(view! { <div class="error-banner">{e.to_string()}</div> }.into_view()),
        None => None,
    };

    view! {
        <div class="manager-page">
            <h2>"Central unit parameters"</h2>
            <form class="parameter-form" on:submit=submit>
                <NumberField label="Lowest temperature (°C)" form=form field=FormField::Lowest />
                <NumberField label="Highest temperature (°C)" form=form field=FormField::Highest />
                <NumberField label="Default temperature (°C)" form=form field=FormField::DefaultTemperature />
                <NumberField label="Low speed fee" form=form field=FormField::LowFee />
                <NumberField label="Medium speed fee" form=form field=FormField::MediumFee />
                <NumberField label="High speed fee" form=form field=FormField::HighFee />

                <label>
                    "Default fan speed"
                    <select on:change=move |ev| {
                        let speed = event_target_value(&ev)
                            .parse()
                            .ok()
                            .and_then(FanSpeed::from_i32);
                        if let Some(speed) = speed {
                            form.update(|f| f.fan_speed = speed);
                        }
                    }>
                        {FanSpeed::ALL
                            .iter()
                            .map(|speed| {
                                let speed = *speed;
                                view! {
                                    <option
                                        value=speed.as_i32().to_string()
                                        selected=move || form.with(|f| f.fan_speed == speed)
                                    >
                                        {speed.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <label>
                    "Mode"
                    <select on:change=move |ev| {
                        let mode = event_target_value(&ev)
                            .parse()
                            .ok()
                            .and_then(Mode::from_i32);
                        if let Some(mode) = mode {
                            form.update(|f| f.mode = mode);
                        }
                    }>
                        {Mode::ALL
                            .iter()
                            .map(|mode| {
                                let mode = *mode;
                                view! {
                                    <option
                                        value=mode.as_i32().to_string()
                                        selected=move || form.with(|f| f.mode == mode)
                                    >
                                        {mode.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <button type="submit" disabled=move || push.pending().get()>
                    "Apply"
                </button>
            </form>

            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}
            {status}
        </div>
    }
}

/// Text input bound to one field of the form
#[component]
fn NumberField(
    label: &'static str,
    form: RwSignal<ParameterForm>,
    field: FormField,
) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());

    view! {
        <label class="setting-item">
            <span class="setting-label">{label}</span>
            <input
                type="number"
                step="0.1"
                prop:value=value
                on:input=move |ev| form.update(|f| *f.field_mut(field) = event_target_value(&ev))
            />
        </label>
    }
}
