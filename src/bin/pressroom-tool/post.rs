use std::fmt::Write;
use std::fs::{create_dir, File};
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};

use pressroom::slug::slugify;
use pressroom::util::os_helper::get_name;

use crate::{PostArgs, PostOutput};

fn get_author(args: &PostArgs) -> String {
    if let Some(ref name) = args.name {
        return name.clone();
    }

    get_name()
}

// Titles and names go inside TOML basic strings, so backslashes and
// double quotes have to be escaped or the scaffolded post fails to parse
fn escape_toml_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn render_front_matter(name: &str, date: &str, title: Option<&str>) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "+++");
    if let Some(title) = title {
        let _ = writeln!(&mut buf, "title = \"{}\"", escape_toml_string(title));
    } else {
        let _ = writeln!(&mut buf, "title = \"Replace with title\"");
    }
    let _ = writeln!(&mut buf, "author = \"{}\"", escape_toml_string(name));
    let _ = writeln!(&mut buf, "published_at = {}", date);
    let _ = writeln!(&mut buf, "tags = []");
    let _ = writeln!(&mut buf, "description = \"\"");
    let _ = writeln!(&mut buf, "draft = true");
    let _ = writeln!(&mut buf, "+++");
    let _ = writeln!(&mut buf, "");
    buf
}

fn render_body() -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "This is a body example");
    let _ = writeln!(&mut buf, "Please remove it and replace with your content");

    buf
}

fn post_file_name(title: &str, date: &DateTime<Utc>) -> String {
    format!("{}-{}", date.format("%Y%m%d"), slugify(title))
}

pub fn post_cmd(args: PostArgs) {
    let name = get_author(&args);
    let date = Utc::now();
    let date_str = date.to_rfc3339_opts(SecondsFormat::Secs, true);

    let req_title = match args.output {
        PostOutput::Stdout => false,
        _ => true,
    };

    if req_title && args.title.is_none() {
        eprintln!("For file and dir outputs, title is required");
        return;
    }

    let header = render_front_matter(&name, &date_str, args.title.as_deref());
    let body = render_body();

    match args.output {
        PostOutput::Stdout => {
            println!("{}", header);
            println!("{}", body);
        }
        PostOutput::File => {
            use std::io::Write;
            let file_name = post_file_name(args.title.unwrap().as_str(), &date);
            let file_name = format!("{}.md", file_name);
            println!("Creating file {}", file_name);
            let mut file = File::create(&file_name).unwrap();
            file.write_all(header.as_bytes()).unwrap();
            file.write_all(body.as_bytes()).unwrap();
        }
        PostOutput::Dir => {
            use std::io::Write;
            let dir_name = post_file_name(args.title.unwrap().as_str(), &date);
            let file_name = "index.md";
            let full_path: PathBuf = PathBuf::from(&dir_name).join(file_name);
            println!("Creating dir post {}", full_path.display());
            create_dir(dir_name).expect("Error create directory");
            let mut file = File::create(&full_path).unwrap();
            file.write_all(header.as_bytes()).unwrap();
            file.write_all(body.as_bytes()).unwrap();
        }
    };
}
