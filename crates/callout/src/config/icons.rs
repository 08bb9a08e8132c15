//! Built-in callout icons (Lucide line icons, inline SVG).

macro_rules! lucide {
    ($($body:literal),+ $(,)?) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $($body,)+
            "</svg>"
        )
    };
}

pub const PENCIL: &str = lucide!(
    r#"<path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"/>"#,
    r#"<path d="m15 5 4 4"/>"#,
);

pub const CLIPBOARD_LIST: &str = lucide!(
    r#"<rect width="8" height="4" x="8" y="2" rx="1" ry="1"/>"#,
    r#"<path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"/>"#,
    r#"<path d="M12 11h4"/>"#,
    r#"<path d="M12 16h4"/>"#,
    r#"<path d="M8 11h.01"/>"#,
    r#"<path d="M8 16h.01"/>"#,
);

pub const INFO: &str = lucide!(
    r#"<circle cx="12" cy="12" r="10"/>"#,
    r#"<path d="M12 16v-4"/>"#,
    r#"<path d="M12 8h.01"/>"#,
);

pub const CIRCLE_CHECK: &str = lucide!(
    r#"<circle cx="12" cy="12" r="10"/>"#,
    r#"<path d="m9 12 2 2 4-4"/>"#,
);

pub const FLAME: &str = lucide!(
    r#"<path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>"#,
);

pub const CHECK: &str = lucide!(r#"<path d="M20 6 9 17l-5-5"/>"#);

pub const CIRCLE_HELP: &str = lucide!(
    r#"<circle cx="12" cy="12" r="10"/>"#,
    r#"<path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/>"#,
    r#"<path d="M12 17h.01"/>"#,
);

pub const TRIANGLE_ALERT: &str = lucide!(
    r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/>"#,
    r#"<path d="M12 9v4"/>"#,
    r#"<path d="M12 17h.01"/>"#,
);

pub const X: &str = lucide!(r#"<path d="M18 6 6 18"/>"#, r#"<path d="m6 6 12 12"/>"#);

pub const ZAP: &str = lucide!(r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#);

pub const BUG: &str = lucide!(
    r#"<path d="m8 2 1.88 1.88"/>"#,
    r#"<path d="M14.12 3.88 16 2"/>"#,
    r#"<path d="M9 7.13v-1a3.003 3.003 0 1 1 6 0v1"/>"#,
    r#"<path d="M12 20c-3.3 0-6-2.7-6-6v-3a4 4 0 0 1 4-4h4a4 4 0 0 1 4 4v3c0 3.3-2.7 6-6 6"/>"#,
    r#"<path d="M12 20v-9"/>"#,
    r#"<path d="M6.53 9C4.6 8.8 3 7.1 3 5"/>"#,
    r#"<path d="M6 13H2"/>"#,
    r#"<path d="M3 21c0-2.1 1.7-3.9 3.8-4"/>"#,
    r#"<path d="M20.97 5c0 2.1-1.6 3.8-3.5 4"/>"#,
    r#"<path d="M22 13h-4"/>"#,
    r#"<path d="M17.2 17c2.1.1 3.8 1.9 3.8 4"/>"#,
);

pub const LIST: &str = lucide!(
    r#"<line x1="8" x2="21" y1="6" y2="6"/>"#,
    r#"<line x1="8" x2="21" y1="12" y2="12"/>"#,
    r#"<line x1="8" x2="21" y1="18" y2="18"/>"#,
    r#"<line x1="3" x2="3.01" y1="6" y2="6"/>"#,
    r#"<line x1="3" x2="3.01" y1="12" y2="12"/>"#,
    r#"<line x1="3" x2="3.01" y1="18" y2="18"/>"#,
);

pub const QUOTE: &str = lucide!(
    r#"<path d="M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z"/>"#,
    r#"<path d="M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"/>"#,
);
