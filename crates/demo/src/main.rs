// File: crates/demo/src/main.rs
// Summary: Demo loads the victim-survey CSV and renders the dashboard charts (bar, comparison, density) to SVGs.

use anyhow::{Context, Result};
use plot_core::{
    group_counts, ordered_series, pair_from_flag_counts, Chart, ChartConfig, ChartData, ChartKind,
    SampleVector, Size, ValueMode,
};
use std::path::{Path, PathBuf};

const VIEW: Size = Size { w: 600.0, h: 500.0 };

/// Category order the dashboard displays, independent of row order.
const CRIME_TYPES: [&str; 8] = [
    "Нападение",
    "Угрозы",
    "Грабеж и разбой",
    "Кража",
    "Мошенничество",
    "Удаленное мошенничество",
    "Прочее",
    "Недостаточно информации",
];

/// Sample rows used when no CSV path is given on the command line.
const SAMPLE_CSV: &str = "\
crime_type,resp_age,resp_is_male
Кража,34,1
Кража,41,0
Мошенничество,29,0
Нападение,23,1
Грабеж и разбой,38,1
Удаленное мошенничество,45,0
Кража,52,1
Угрозы,31,0
Прочее,27,1
Мошенничество,60,0
Нападение,19,1
Кража,44,0
Недостаточно информации,36,1
Удаленное мошенничество,33,0
Грабеж и разбой,48,1
";

struct SurveyRow {
    crime_type: String,
    resp_age: f64,
    resp_is_male: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let rows = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            println!("Using input file: {}", path.display());
            load_survey_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file given; using the embedded sample.");
            read_rows(csv::Reader::from_reader(SAMPLE_CSV.as_bytes()))?
        }
    };
    println!("Loaded {} survey rows", rows.len());
    if rows.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    // 1) Crime type bar chart (percentage mode, as the dashboard shows it)
    let type_counts = group_counts(rows.iter().map(|r| r.crime_type.as_str()));
    let series = ordered_series(&type_counts, &CRIME_TYPES);
    let mut config = ChartConfig::new(ChartKind::Bar, "Распределение по типам преступлений");
    config.display.values = ValueMode::Percentage;
    let mut bar = Chart::new(config);
    bar.attach_view(VIEW)?;
    bar.update(ChartData::Series(series))?;
    bar.finish_animations();
    write_chart(&bar, "bar")?;

    // 2) Gender comparison bar
    let flag_counts = group_counts(rows.iter().map(|r| r.resp_is_male.as_str()));
    let pair = pair_from_flag_counts(&flag_counts, "Мужчины", "Женщины")?;
    let mut pair_chart = Chart::new(ChartConfig::new(ChartKind::PairBar, "Пол пострадавших"));
    pair_chart.update(ChartData::Pair(pair))?;
    pair_chart.attach_view(VIEW)?;
    pair_chart.finish_animations();
    write_chart(&pair_chart, "pair")?;

    // 3) Age density curve
    let samples = SampleVector::from_raw(rows.iter().map(|r| r.resp_age));
    let mut density = Chart::new(ChartConfig::new(ChartKind::Density, "Возраст пострадавших"));
    density.attach_view(VIEW)?;
    density.update(ChartData::Samples(samples))?;
    density.finish_animations();
    write_chart(&density, "density")?;

    Ok(())
}

fn write_chart(chart: &Chart, suffix: &str) -> Result<()> {
    let mut out = PathBuf::from("target/out");
    out.push(format!("chart_{suffix}.svg"));
    plot_render_svg::render_to_file(chart.scene(), VIEW, &out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn load_survey_csv(path: &Path) -> Result<Vec<SurveyRow>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_rows(rdr)
}

fn read_rows<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<SurveyRow>> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |name: &str| headers.iter().position(|h| h == name);
    let i_type = idx("crime_type");
    let i_age = idx("resp_age");
    let i_male = idx("resp_is_male");
    if i_type.is_none() || i_age.is_none() || i_male.is_none() {
        println!("Warning: missing one of crime_type/resp_age/resp_is_male columns.");
    }

    let field = |rec: &csv::StringRecord, i: Option<usize>| -> String {
        i.and_then(|ix| rec.get(ix)).unwrap_or("").trim().to_string()
    };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let age = field(&rec, i_age).parse::<f64>().unwrap_or(f64::NAN);
        out.push(SurveyRow {
            crime_type: field(&rec, i_type),
            resp_age: age,
            resp_is_male: field(&rec, i_male),
        });
    }
    Ok(out)
}
