use clap::{Arg, Command};
use csv2xls::XlsConverter;
use log::{error, Level};
use simple_logger::init_with_level;
use std::process::exit;

pub fn main() {
    // Set up logging
    init_with_level(Level::Info).unwrap();

    // Get arguments.
    let args_matches = Command::new("csv2xls")
        .about(
            "Convert a delimiter-separated text file (CSV and friends) into a
legacy Excel workbook (.xls): an OLE2 compound file holding a BIFF8 workbook
stream and a summary-information stream.",
        )
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("csv")
                .long("csv")
                .short('c')
                .help("The path of the delimiter-separated input file.")
                .takes_value(true),
        )
        .arg(
            Arg::new("xls")
                .long("xls")
                .short('x')
                .help("The path the .xls workbook is written to.")
                .takes_value(true),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .short('d')
                .help("Field delimiter: one ASCII character, or tab/comma/semicolon/pipe/space.")
                .takes_value(true)
                .default_value(","),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Document title for the summary information.")
                .takes_value(true),
        )
        .arg(
            Arg::new("subject")
                .long("subject")
                .help("Document subject for the summary information.")
                .takes_value(true),
        )
        .arg(
            Arg::new("creator")
                .long("creator")
                .help("Document author for the summary information.")
                .takes_value(true),
        )
        .arg(
            Arg::new("keywords")
                .long("keywords")
                .help("Document keywords for the summary information.")
                .takes_value(true),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .help("Document comments for the summary information.")
                .takes_value(true),
        )
        .arg(
            Arg::new("last-modified-by")
                .long("last-modified-by")
                .help("Last-saved-by name for the summary information.")
                .takes_value(true),
        )
        .get_matches();

    let csv_path = match args_matches.value_of("csv") {
        Some(t) => t,
        _ => {
            error!("The input csv path is required.");
            exit(1);
        }
    };
    let xls_path = match args_matches.value_of("xls") {
        Some(t) => t,
        _ => {
            error!("The output xls path is required.");
            exit(1);
        }
    };
    let delimiter = args_matches.value_of("delimiter").unwrap_or(",");

    let converter = match XlsConverter::new(csv_path, xls_path, delimiter) {
        Ok(converter) => converter,
        Err(error) => {
            error!("{}", error);
            exit(1);
        }
    };
    let converter = converter
        .with_title(args_matches.value_of("title").unwrap_or(""))
        .with_subject(args_matches.value_of("subject").unwrap_or(""))
        .with_creator(args_matches.value_of("creator").unwrap_or(""))
        .with_keywords(args_matches.value_of("keywords").unwrap_or(""))
        .with_description(args_matches.value_of("description").unwrap_or(""))
        .with_last_modified_by(args_matches.value_of("last-modified-by").unwrap_or(""));

    if let Err(error) = converter.convert_blocking() {
        error!("{}", error);
        exit(1);
    }
}
