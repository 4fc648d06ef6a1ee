//! Country dial-code picker

use dioxus::prelude::*;

pub struct Country {
    pub name: &'static str,
    pub dial_code: &'static str,
    pub code: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { name: "Australia", dial_code: "+61", code: "AU" },
    Country { name: "Brazil", dial_code: "+55", code: "BR" },
    Country { name: "Canada", dial_code: "+1", code: "CA" },
    Country { name: "France", dial_code: "+33", code: "FR" },
    Country { name: "Germany", dial_code: "+49", code: "DE" },
    Country { name: "India", dial_code: "+91", code: "IN" },
    Country { name: "Japan", dial_code: "+81", code: "JP" },
    Country { name: "Singapore", dial_code: "+65", code: "SG" },
    Country { name: "South Korea", dial_code: "+82", code: "KR" },
    Country { name: "Taiwan", dial_code: "+886", code: "TW" },
    Country { name: "United Kingdom", dial_code: "+44", code: "GB" },
    Country { name: "United States", dial_code: "+1", code: "US" },
];

#[component]
pub fn CountrySelect(value: String, disabled: bool, on_change: EventHandler<String>) -> Element {
    rsx! {
        select {
            class: "w-2/5 px-3 py-2 border border-gray-300 rounded-md bg-white focus:outline-none focus:ring-2 focus:ring-amber-500 disabled:opacity-50",
            disabled,
            onchange: move |e| on_change.call(e.value()),
            option {
                value: "",
                disabled: true,
                selected: value.is_empty(),
                "Country code"
            }
            for country in COUNTRIES {
                option {
                    key: "{country.code}",
                    value: country.dial_code,
                    selected: value == country.dial_code,
                    "{country.name} ({country.dial_code})"
                }
            }
        }
    }
}
