use crate::cli::{Cli, Commands};
use crate::domain::constants::DEFAULT_PAGE;
use crate::domain::models::Ayah;
use crate::services::mushaf::{format_ayah_line, juzs, page_ayahs, page_info, page_lines, surahs};
use crate::services::output::{print_one, print_out};

pub fn handle_runtime_commands(cli: &Cli, ayahs: &[Ayah]) -> anyhow::Result<()> {
    match &cli.command {
        None => {
            let page = cli.page.unwrap_or(DEFAULT_PAGE);
            if cli.json {
                let matches: Vec<&Ayah> = page_ayahs(ayahs, page).collect();
                log::debug!("page {} has {} ayahs", page, matches.len());
                print_out(true, &matches, |a| format_ayah_line(a))?;
            } else {
                for line in page_lines(ayahs, page) {
                    println!("{}", line);
                }
            }
        }
        Some(Commands::Surahs) => {
            print_out(cli.json, &surahs(ayahs), |s| {
                format!(
                    "{}\t{}\t{}\t{}",
                    s.number, s.name_en, s.name_ar, s.start_page
                )
            })?;
        }
        Some(Commands::Juzs) => {
            print_out(cli.json, &juzs(ayahs), |j| {
                format!("{}\t{}", j.number, j.start_page)
            })?;
        }
        Some(Commands::Info { page }) => {
            let info = page_info(ayahs, page.unwrap_or(DEFAULT_PAGE));
            print_one(cli.json, info, |i| {
                vec![
                    format!("page: {}", i.page),
                    format!("ayahs: {}", i.ayah_count),
                    format!("surah: {}", i.surah_name_ar),
                    format!("juz: {}", i.juz),
                ]
            })?;
        }
    }
    Ok(())
}
