//! Interactive order session
//!
//! Drives one `Order` through the numbered text menu. Input and output are
//! generic so the loop can run against a terminal or an in-memory transcript.
//!
//! Rejected adds and removes never print anything; the reason is only
//! available in the debug log.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::order::Order;
use crate::types::Model;

const MENU: &[&str] = &[
    "1. Select a model (E, L, X)",
    "2. Display available options and prices",
    "3. Add an option",
    "4. Remove an option",
    "5. Cancel order",
    "6. Quit",
];

/// Print the catalog as a price/name table, in catalog order.
pub fn write_option_listing<W: Write>(catalog: &Catalog, out: &mut W) -> std::io::Result<()> {
    if catalog.is_empty() {
        return writeln!(out, "No options available.");
    }
    writeln!(out, "{:>8}  {}", "Price", "Option")?;
    for option in catalog.iter() {
        writeln!(out, "{:>8}  {}", option.price(), option.name())?;
    }
    Ok(())
}

/// Top-level menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SelectModel,
    ListOptions,
    AddOption,
    RemoveOption,
    CancelOrder,
    Quit,
}

impl MenuChoice {
    /// Map a menu number (1-6) to its command
    pub fn from_number(n: u64) -> Option<Self> {
        match n {
            1 => Some(Self::SelectModel),
            2 => Some(Self::ListOptions),
            3 => Some(Self::AddOption),
            4 => Some(Self::RemoveOption),
            5 => Some(Self::CancelOrder),
            6 => Some(Self::Quit),
            _ => None,
        }
    }
}

/// One user's session: a borrowed catalog, an owned order, and the console.
pub struct Session<'a, R, W> {
    catalog: &'a Catalog,
    order: Order,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            order: Order::new(),
            input,
            output,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn into_order(self) -> Order {
        self.order
    }

    /// Run the menu loop until Quit or end of input.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started with {} catalog options", self.catalog.len());
        loop {
            self.show_selection()?;
            self.show_menu()?;

            let Some(number) = self.read_choice()? else {
                break;
            };
            let Some(choice) = MenuChoice::from_number(number) else {
                debug!("Ignoring menu choice {}", number);
                continue;
            };
            debug!("Menu choice: {:?}", choice);

            if !self.dispatch(choice)? {
                break;
            }
        }
        info!("Session ended");
        Ok(())
    }

    /// Apply one command. Returns false when the session should end.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::SelectModel => match self.prompt_model()? {
                Some(model) => self.order.select_model(model),
                None => return Ok(false),
            },
            MenuChoice::ListOptions => self.list_options()?,
            MenuChoice::AddOption => match self.prompt("Enter the option to add: ")? {
                Some(name) => {
                    let _ = self.order.add_option(self.catalog, &name);
                }
                None => return Ok(false),
            },
            MenuChoice::RemoveOption => match self.prompt("Enter the option to remove: ")? {
                Some(name) => {
                    let _ = self.order.remove_option(self.catalog, &name);
                }
                None => return Ok(false),
            },
            MenuChoice::CancelOrder => self.order.reset(),
            MenuChoice::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn show_selection(&mut self) -> Result<()> {
        let names = self.order.describe_selection(self.catalog);
        let options = if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        };

        writeln!(self.output)?;
        writeln!(self.output, "Model: {}", self.order.model())?;
        writeln!(self.output, "Options: {}", options)?;
        writeln!(
            self.output,
            "Total price: ${}",
            self.order.total_price(self.catalog)
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        for line in MENU {
            writeln!(self.output, "{}", line)?;
        }
        write!(self.output, "Enter a choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn list_options(&mut self) -> Result<()> {
        write_option_listing(self.catalog, &mut self.output)?;
        Ok(())
    }

    /// Read lines until one holds a non-negative integer. `None` at end of input.
    fn read_choice(&mut self) -> Result<Option<u64>> {
        while let Some(line) = self.read_line()? {
            if let Ok(n) = line.trim().parse::<u64>() {
                return Ok(Some(n));
            }
            debug!("Ignoring non-numeric choice {:?}", line);
        }
        Ok(None)
    }

    /// Prompt until a valid model letter is entered. `None` at end of input.
    fn prompt_model(&mut self) -> Result<Option<Model>> {
        while let Some(answer) = self.prompt("Enter the model (E, L, X): ")? {
            match answer.trim().parse::<Model>() {
                Ok(model) => return Ok(Some(model)),
                Err(_) => debug!("Invalid model {:?}", answer),
            }
        }
        Ok(None)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so a garbled entry simply
    /// fails to match anything.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
