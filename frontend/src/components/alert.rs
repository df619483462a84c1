use leptos::*;

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertVariant {
    #[default]
    Info,
    Error,
}

impl AlertVariant {
    pub fn class(self) -> &'static str {
        match self {
            AlertVariant::Info => "alert",
            AlertVariant::Error => "alert alert-error",
        }
    }

    fn role(self) -> &'static str {
        match self {
            AlertVariant::Info => "status",
            AlertVariant::Error => "alert",
        }
    }
}

/// Alert component for displaying messages.
#[component]
pub fn Alert(#[prop(optional)] variant: AlertVariant, children: Children) -> impl IntoView {
    view! {
        <div class=variant.class() role=variant.role()>
            {children()}
        </div>
    }
}
