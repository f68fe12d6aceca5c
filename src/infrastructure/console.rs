// SPDX-License-Identifier: MPL-2.0
//! Text host: prints what a browser host would render.

use crate::application::port::{Host, ViewRef};
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::routes::RouteDescriptor;
use std::io::{self, Write};

/// Writes registered components, the route table and a mount banner.
///
/// Route titles are resolved at mount time, in the active locale.
pub struct ConsoleHost<W: Write> {
    out: W,
    routes: Vec<RouteDescriptor>,
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            routes: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ConsoleHost<W> {
    fn render(&mut self, root: ViewRef, target: &str, i18n: &I18n) -> io::Result<()> {
        let count = self.routes.len().to_string();
        let title = i18n.translate("site.title");
        let banner = i18n.translate_with(
            "site.mounted",
            &[("title", title.as_str()), ("target", target), ("count", count.as_str())],
        );
        writeln!(self.out, "{banner} [{root}]")?;
        for route in &self.routes {
            writeln!(
                self.out,
                "  {:<16} {:<16} {:<12} {}",
                route.path,
                route.name,
                route.view,
                i18n.translate(&route.title_key())
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> Host for ConsoleHost<W> {
    fn register_component(&mut self, name: &str, view: ViewRef) -> Result<()> {
        writeln!(self.out, "component {name} -> {view}")?;
        Ok(())
    }

    fn register_routes(&mut self, routes: &[RouteDescriptor]) -> Result<()> {
        self.routes = routes.to_vec();
        Ok(())
    }

    fn mount(&mut self, root: ViewRef, target: &str, i18n: &I18n) -> Result<()> {
        self.render(root, target, i18n)
            .map_err(|err| Error::Mount(format!("{root} at {target}: {err}")))
    }
}
