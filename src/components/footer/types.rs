pub struct FooterItem {
    /// Key label as currently bound, e.g. `Ctrl+S`.
    pub key: String,
    pub desc: &'static str,
    pub highlighted: bool,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}
