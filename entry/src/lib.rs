use config::{ANNOTATION_COUNTS, INFO_TABLE};

use fam_count::lib_fam_count;
use fam_info::lib_fam_info;

const KEYS: [&str; 2] = ["--info", "--tbl"];

pub fn lib(mut args: Vec<String>) {
    __check_args(&args);

    // WARN: will expect to always have outdir as last argument
    let outdir = args.pop().unwrap_or_else(|| {
        panic!(
            "ERROR: Missing output directory argument, you had: {:?}",
            args
        )
    });

    let info = value_of(&args, "--info");
    let tbl = value_of(&args, "--tbl");

    let table = format!("{}/{}", outdir, INFO_TABLE);
    let counts = format!("{}/{}", outdir, ANNOTATION_COUNTS);

    lib_fam_info(vec![info, "-o".to_string(), table.clone()]);
    lib_fam_count(vec![
        "--tbl".to_string(),
        tbl,
        "--cutoffs".to_string(),
        table,
        "--output".to_string(),
        counts,
    ]);
}

/// Check if all required arguments are present
fn __check_args(args: &Vec<String>) {
    for key in KEYS.iter() {
        if !args.contains(&key.to_string()) {
            log::error!("Missing required argument: {}", key);
            std::process::exit(1);
        }
    }
}

/// Get the value following a key
fn value_of(args: &[String], key: &str) -> String {
    let idx = args.iter().position(|arg| arg == key).unwrap_or_else(|| {
        log::error!("Missing required argument: {}", key);
        std::process::exit(1);
    });

    args.get(idx + 1).cloned().unwrap_or_else(|| {
        log::error!("Missing value for argument: {}", key);
        std::process::exit(1);
    })
}
