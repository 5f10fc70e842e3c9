use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::Arc;

use arrow::csv::reader::Format;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::record_batch::RecordBatch;
use clap::Parser;

use tablesplit::TablePartitioner;

#[derive(Parser, Debug)]
#[command(name = "csvsplit", version, about = "CSV -> per-batch CSV splitter")]
struct Args {
    #[arg(long)]
    input: PathBuf,
    /// Directory receiving one part-NNNNN.csv per batch. Created if missing.
    #[arg(long = "out-dir")]
    out_dir: PathBuf,

    /// Key column to batch by.
    #[arg(long, default_value = "dt")]
    column: String,

    /// Minimum rows per batch.
    #[arg(long = "chunk-size")]
    chunk_size: usize,

    /// CSV delimiter. If omitted, we auto-detect (',' vs '|') from the first line.
    #[arg(long)]
    delim: Option<String>,

    /// Treat the first line as headers. Defaults to true.
    #[arg(long)]
    headers: Option<bool>,

    /// Rows to sample for schema inference.
    #[arg(long = "infer-rows", default_value_t = 1000)]
    infer_rows: usize,
}

fn sniff_delimiter(input: &PathBuf) -> u8 {
    // Read a little from the start
    let mut buf = [0u8; 4096];
    let n = File::open(input)
        .and_then(|mut f| f.read(&mut buf))
        .unwrap_or(0);
    let s = std::str::from_utf8(&buf[..n]).unwrap_or("");

    // delimiter: pick the one with more occurrences on the first line
    let first_line = s.lines().next().unwrap_or(s);
    let commas = first_line.matches(',').count();
    let pipes = first_line.matches('|').count();
    if pipes > commas { b'|' } else { b',' }
}

fn read_csv(args: &Args) -> Result<RecordBatch, Box<dyn std::error::Error>> {
    let delim = args
        .delim
        .as_ref()
        .map(|d| d.as_bytes()[0])
        .unwrap_or_else(|| sniff_delimiter(&args.input));

    let format = Format::default()
        .with_header(args.headers.unwrap_or(true))
        .with_delimiter(delim);

    let mut file = File::open(&args.input)?;
    let (schema, _) = format.infer_schema(&mut file, Some(args.infer_rows))?;
    file.seek(SeekFrom::Start(0))?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .build(file)?;
    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok(arrow::compute::concat_batches(&schema, &batches)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("input = {}", args.input.display());
    eprintln!("out-dir = {}", args.out_dir.display());
    if !args.input.exists() {
        eprintln!("ERROR: input file does not exist");
        std::process::exit(2);
    }
    std::fs::create_dir_all(&args.out_dir)?;

    let table = read_csv(&args)?;
    eprintln!("read {} rows from {}", table.num_rows(), args.input.display());

    let partitioner = TablePartitioner::new(args.chunk_size, args.column.as_str());
    let output = partitioner.partition(&table)?;

    let mut written = 0usize;
    for (i, batch) in output.iter().enumerate() {
        let path = args.out_dir.join(format!("part-{:05}.csv", i));
        let file = File::create(&path)?;
        let mut writer = WriterBuilder::new()
            .with_header(args.headers.unwrap_or(true))
            .build(file);
        writer.write(&batch)?;
        written += 1;
    }

    eprintln!(
        "Done. Wrote {} batches to {}",
        written,
        args.out_dir.display()
    );
    eprint!("{}", output.stats());

    Ok(())
}
