//! Static page structure handed to the router.

/// One top-level page region, shown exclusively of its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Identifier used by nav links (the `#id` anchor).
    pub id: String,
    /// Heading shown in navigation.
    pub title: String,
    pub(crate) visible: bool,
    pub(crate) exiting: bool,
    pub(crate) entering: bool,
}

impl Section {
    /// Create a hidden section.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            visible: false,
            exiting: false,
            entering: false,
        }
    }

    /// Whether the section is displayed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the exit animation is running.
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Whether the enter animation is running.
    pub fn is_entering(&self) -> bool {
        self.entering
    }

    /// Visible and not animating.
    pub fn is_at_rest(&self) -> bool {
        self.visible && !self.exiting && !self.entering
    }

    /// The CSS classes the section would carry.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["page-section"];
        if self.visible {
            classes.push("visible");
        }
        if self.exiting {
            classes.push("page-exit");
        }
        if self.entering {
            classes.push("page-enter");
        }
        classes
    }
}

/// A navigation control bound to a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Text of the link.
    pub label: String,
    /// Identifier of the section it shows.
    pub target: String,
    pub(crate) active: bool,
}

impl NavLink {
    /// Create an inactive link.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            active: false,
        }
    }

    /// Whether this link is highlighted as the current page.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The collapsible menu shown on narrow screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileMenu {
    shown: bool,
}

impl MobileMenu {
    /// Create a hidden menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is expanded.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.shown = !self.shown;
        self.shown
    }

    /// Hide the menu. Returns whether it was shown.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.shown, false)
    }
}

/// Everything the router needs to know about the page's markup.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// Nav links in menu order.
    pub links: Vec<NavLink>,
    /// The logo link, if the header has one.
    pub logo: Option<NavLink>,
    /// The mobile menu, if the header has one.
    pub menu: Option<MobileMenu>,
}

impl PageLayout {
    /// An empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section with a matching nav link.
    pub fn with_page(mut self, id: &str, title: &str) -> Self {
        self.sections.push(Section::new(id, title));
        self.links.push(NavLink::new(title, id));
        self
    }

    /// Add a section without a nav link.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Add a nav link.
    pub fn with_link(mut self, link: NavLink) -> Self {
        self.links.push(link);
        self
    }

    /// Add a logo link pointing at `target`.
    pub fn with_logo(mut self, target: &str) -> Self {
        self.logo = Some(NavLink::new("logo", target));
        self
    }

    /// Add a mobile menu.
    pub fn with_mobile_menu(mut self) -> Self {
        self.menu = Some(MobileMenu::new());
        self
    }

    /// The portfolio's page structure.
    pub fn portfolio() -> Self {
        Self::new()
            .with_page("home", "Home")
            .with_page("about", "About")
            .with_page("projects", "Projects")
            .with_page("contact", "Contact")
            .with_logo("home")
            .with_mobile_menu()
    }

    /// Position of the section with this id.
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}
