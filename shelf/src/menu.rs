//! Interactive inventory menu driven over any line-based input and output.
use crate::chained::ChainedHashTable;
use crate::config::Config;
use crate::export::export_csv;
use crate::id::generate_identifier;
use crate::performance::{compare_search_performance, write_timings};
use crate::sample::seed_sample_data;
use log::{info, warn};
use rand_chacha::ChaCha20Rng;
use shelf_core::{HashTable, ProductRecord, RecordUpdate, ShelfError};
use std::collections::HashSet;
use std::io::{BufRead, Write};

const MENU: &str = "\
====== Baby Product Inventory ======
1. Insert Product (Auto Random ID)
2. Search Product
3. Edit Product
4. Delete Product
5. Display All ID
6. Display All With Details
7. Compare Hash Table vs Array Performance
8. Export to CSV
9. Exit";

const INVALID_NUMBER: &str = "Invalid numeric value for price or quantity.";
const NOT_FOUND: &str = "Product not found.";

/// Whether the loop goes on after a choice.
enum Flow {
    Continue,
    Exit,
}

/// State of one interactive session: the table and the identifiers issued so far.
pub struct Session {
    table: ChainedHashTable,
    used_ids: HashSet<String>,
    rng: ChaCha20Rng,
    config: Config,
}

impl Session {
    /// Create a session with a fresh table seeded with `config.sample_count` records.
    pub fn new(config: Config) -> Result<Self, ShelfError> {
        let mut table = ChainedHashTable::with_capacity(config.capacity)?;
        let mut rng = config.rng();
        let mut used_ids = HashSet::new();
        seed_sample_data(&mut table, &mut rng, &mut used_ids, config.sample_count)?;

        Ok(Self {
            table,
            used_ids,
            rng,
            config,
        })
    }

    pub fn table(&self) -> &ChainedHashTable {
        &self.table
    }

    /// Identifiers that the generator must not hand out again.
    pub fn used_ids(&self) -> &HashSet<String> {
        &self.used_ids
    }

    /// Run the menu loop until the user exits or `input` ends.
    ///
    /// A malformed identifier typed by the user is reported and the loop goes on, I/O failures end
    /// the session.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), ShelfError> {
        loop {
            writeln!(output, "\n{MENU}")?;
            let Some(choice) = prompt(input, output, "Enter choice: ")? else {
                break;
            };

            match self.handle(choice.trim(), input, output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ShelfError::MalformedIdentifier(id)) => {
                    warn!("Rejected malformed product ID {:?}", id);
                    writeln!(output, "Invalid product ID {id:?}, expected e.g. P12345678.")?;
                }
                Err(e) => return Err(e),
            }
        }
        writeln!(output, "Exiting Inventory System...")?;
        Ok(())
    }

    fn handle<R: BufRead, W: Write>(
        &mut self,
        choice: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<Flow, ShelfError> {
        match choice {
            "1" => self.insert(input, output),
            "2" => self.search(input, output),
            "3" => self.edit(input, output),
            "4" => self.delete(input, output),
            "5" => {
                self.table.write_ids(output)?;
                Ok(Flow::Continue)
            }
            "6" => {
                self.table.write_items(output)?;
                Ok(Flow::Continue)
            }
            "7" => self.compare(output),
            "8" => self.export(output),
            "9" => Ok(Flow::Exit),
            _ => {
                writeln!(output, "Invalid choice. Try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn insert<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Flow, ShelfError> {
        let Some(name) = prompt(input, output, "Enter Product Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = prompt(input, output, "Enter Product Type: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = prompt(input, output, "Enter Price: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(price) = price.trim().parse::<f64>() else {
            writeln!(output, "{INVALID_NUMBER}")?;
            return Ok(Flow::Continue);
        };
        let Some(quantity) = prompt(input, output, "Enter Quantity: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(quantity) = quantity.trim().parse::<i64>() else {
            writeln!(output, "{INVALID_NUMBER}")?;
            return Ok(Flow::Continue);
        };

        let id = generate_identifier(&mut self.rng, &mut self.used_ids);
        self.table
            .insert(ProductRecord::new(id.clone(), name, category, price, quantity))?;
        info!("Inserted product {}", id);
        writeln!(output, "Product inserted successfully! Assigned ID: {id}")?;
        Ok(Flow::Continue)
    }

    fn search<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Flow, ShelfError> {
        let text = "Enter Product ID to search (e.g. P12345678): ";
        let Some(id) = prompt(input, output, text)? else {
            return Ok(Flow::Exit);
        };
        match self.table.search(id.trim())? {
            Some(record) => writeln!(output, "Product Found:\n{record}")?,
            None => writeln!(output, "{NOT_FOUND}")?,
        }
        Ok(Flow::Continue)
    }

    fn edit<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Flow, ShelfError> {
        let text = "Enter Product ID to edit (e.g. P12345678): ";
        let Some(id) = prompt(input, output, text)? else {
            return Ok(Flow::Exit);
        };
        let id = id.trim();
        match self.table.search(id)? {
            Some(record) => writeln!(output, "Editing: {record}")?,
            None => {
                writeln!(output, "{NOT_FOUND}")?;
                return Ok(Flow::Continue);
            }
        }

        let mut answers: [String; 4] = Default::default();
        for (answer, field) in answers.iter_mut().zip(["name", "type", "price", "quantity"]) {
            let text = format!("Enter new {field} (leave blank to keep current): ");
            let Some(line) = prompt(input, output, &text)? else {
                return Ok(Flow::Exit);
            };
            *answer = line;
        }
        let [name, category, price, quantity] = answers;

        let (Ok(price), Ok(quantity)) = (
            parse_optional::<f64>(&price),
            parse_optional::<i64>(&quantity),
        ) else {
            writeln!(output, "{INVALID_NUMBER}")?;
            return Ok(Flow::Continue);
        };
        let update = RecordUpdate {
            name: non_blank(name),
            category: non_blank(category),
            price,
            quantity,
        };

        if self.table.edit(id, update)? {
            writeln!(output, "Product updated successfully!")?;
        } else {
            writeln!(output, "{NOT_FOUND}")?;
        }
        Ok(Flow::Continue)
    }

    fn delete<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Flow, ShelfError> {
        let text = "Enter Product ID to delete (e.g. P12345678): ";
        let Some(id) = prompt(input, output, text)? else {
            return Ok(Flow::Exit);
        };
        let id = id.trim();
        if self.table.delete(id)? {
            // The identifier may be issued again.
            self.used_ids.remove(id);
            writeln!(output, "Product deleted successfully!")?;
        } else {
            writeln!(output, "{NOT_FOUND}")?;
        }
        Ok(Flow::Continue)
    }

    fn compare<W: Write>(&mut self, output: &mut W) -> Result<Flow, ShelfError> {
        writeln!(output, "========== HASH TABLE VS ARRAY PERFORMANCE ==========")?;
        let timings = compare_search_performance(
            &mut self.table,
            &mut self.rng,
            &mut self.used_ids,
            &self.config.benchmark_sizes,
            self.config.benchmark_repetitions,
        )?;
        match timings {
            Some(timings) => write_timings(output, &timings)?,
            None => writeln!(
                output,
                "No data available in hash table. Please insert some records first."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn export<W: Write>(&mut self, output: &mut W) -> Result<Flow, ShelfError> {
        let path = &self.config.export_path;
        if export_csv(&self.table, path)? {
            writeln!(
                output,
                "Exported all product IDs (grouped by table index) to '{}' successfully!",
                path.display()
            )?;
        } else {
            writeln!(output, "No products in the hash table to export.")?;
        }
        Ok(Flow::Continue)
    }
}

/// Print `text` and read one line, returns `None` at the end of `input`.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>, ShelfError> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}

fn non_blank(answer: String) -> Option<String> {
    if answer.is_empty() {
        None
    } else {
        Some(answer)
    }
}

fn parse_optional<T: std::str::FromStr>(answer: &str) -> Result<Option<T>, T::Err> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    answer.parse().map(Some)
}
