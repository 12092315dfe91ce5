//! CSV export of the scan results.
//!
//! Three relational tables with dense integer ids assigned in a single
//! left-to-right pass over the records. Ids are continuous across files
//! and objects, never reset per file. String columns are quoted, id
//! columns are bare integers.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use super::FileRecord;
use crate::util::Result;

/// Output path of the files table.
pub const FILES_CSV: &str = "/tmp/abc_fichiers.csv";
/// Output path of the objects table.
pub const OBJECTS_CSV: &str = "/tmp/abc_objets.csv";
/// Output path of the attributes table.
pub const ATTRIBUTES_CSV: &str = "/tmp/abc_attributs.csv";

/// Write the three tables to their fixed output paths.
pub fn export_tables(files: &[FileRecord]) -> Result<()> {
    info!(path = FILES_CSV, "writing files table");
    info!(path = OBJECTS_CSV, "writing objects table");
    info!(path = ATTRIBUTES_CSV, "writing attributes table");

    write_tables(
        files,
        File::create(Path::new(FILES_CSV))?,
        File::create(Path::new(OBJECTS_CSV))?,
        File::create(Path::new(ATTRIBUTES_CSV))?,
    )
}

/// Write the three tables to arbitrary writers.
pub fn write_tables<W1, W2, W3>(
    files: &[FileRecord],
    files_out: W1,
    objects_out: W2,
    attributes_out: W3,
) -> Result<()>
where
    W1: Write,
    W2: Write,
    W3: Write,
{
    let mut files_w = table_writer(files_out, "id,chemin")?;
    let mut objects_w = table_writer(objects_out, "id,id_fichier,type")?;
    let mut attributes_w = table_writer(attributes_out, "id,id_objet,nom,type,portee")?;

    let mut object_id: u64 = 0;
    let mut attribute_id: u64 = 0;

    for (file_id, file) in files.iter().enumerate() {
        files_w.write_record([
            file_id.to_string(),
            file.path.display().to_string(),
        ])?;

        for object in &file.objects {
            objects_w.write_record([
                object_id.to_string(),
                file_id.to_string(),
                object.kind.label().to_string(),
            ])?;

            for attribute in &object.attributes {
                attributes_w.write_record([
                    attribute_id.to_string(),
                    object_id.to_string(),
                    attribute.name.clone(),
                    attribute.type_name.clone(),
                    attribute.scope.label().to_string(),
                ])?;
                attribute_id += 1;
            }

            object_id += 1;
        }
    }

    files_w.flush()?;
    objects_w.flush()?;
    attributes_w.flush()?;
    Ok(())
}

/// Write the literal header row, then wrap the writer for quoted records.
fn table_writer<W: Write>(mut out: W, header: &str) -> Result<csv::Writer<W>> {
    writeln!(out, "{}", header)?;
    Ok(WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeometryScope;
    use crate::geom::GeomKind;
    use crate::scan::{Attribute, ObjectRecord};

    fn render(files: &[FileRecord]) -> (String, String, String) {
        let mut f = Vec::new();
        let mut o = Vec::new();
        let mut a = Vec::new();
        write_tables(files, &mut f, &mut o, &mut a).unwrap();
        (
            String::from_utf8(f).unwrap(),
            String::from_utf8(o).unwrap(),
            String::from_utf8(a).unwrap(),
        )
    }

    fn attr(name: &str, type_name: &str, scope: GeometryScope) -> Attribute {
        Attribute {
            name: name.to_string(),
            type_name: type_name.to_string(),
            scope,
        }
    }

    #[test]
    fn test_empty_input_yields_header_only_tables() {
        let (f, o, a) = render(&[]);
        assert_eq!(f, "id,chemin\n");
        assert_eq!(o, "id,id_fichier,type\n");
        assert_eq!(a, "id,id_objet,nom,type,portee\n");
    }

    #[test]
    fn test_single_file_tables() {
        let mut file = FileRecord::new("/scenes/a.abc");
        file.objects.push(ObjectRecord {
            kind: GeomKind::PolyMesh,
            attributes: vec![attr("width", "float32_t", GeometryScope::Varying)],
        });

        let (f, o, a) = render(&[file]);
        assert_eq!(f, "id,chemin\n0,\"/scenes/a.abc\"\n");
        assert_eq!(o, "id,id_fichier,type\n0,0,\"IPolyMesh\"\n");
        assert_eq!(
            a,
            "id,id_objet,nom,type,portee\n0,0,\"width\",\"float32_t\",\"kVaryingScope\"\n"
        );
    }

    #[test]
    fn test_ids_are_dense_across_files() {
        let mut file_a = FileRecord::new("/scenes/a.abc");
        file_a.objects.push(ObjectRecord {
            kind: GeomKind::Xform,
            attributes: Vec::new(),
        });
        file_a.objects.push(ObjectRecord {
            kind: GeomKind::PolyMesh,
            attributes: vec![
                attr("Cd", "float32_t[3]", GeometryScope::Vertex),
                attr("id", "int32_t", GeometryScope::Varying),
            ],
        });

        let mut file_b = FileRecord::new("/scenes/b.abc");
        file_b.objects.push(ObjectRecord {
            kind: GeomKind::Points,
            attributes: vec![attr("pscale", "float32_t", GeometryScope::Varying)],
        });

        let (f, o, a) = render(&[file_a, file_b]);

        assert_eq!(f.lines().count(), 3);
        // Object ids keep counting into the second file
        assert_eq!(
            o,
            "id,id_fichier,type\n\
             0,0,\"IXform\"\n\
             1,0,\"IPolyMesh\"\n\
             2,1,\"IPoints\"\n"
        );
        // Attribute ids reference the global object ids
        assert_eq!(
            a,
            "id,id_objet,nom,type,portee\n\
             0,1,\"Cd\",\"float32_t[3]\",\"kVertexScope\"\n\
             1,1,\"id\",\"int32_t\",\"kVaryingScope\"\n\
             2,2,\"pscale\",\"float32_t\",\"kVaryingScope\"\n"
        );
    }

    #[test]
    fn test_delimiter_in_string_is_quoted() {
        let mut file = FileRecord::new("/scenes/with, comma.abc");
        file.objects.push(ObjectRecord {
            kind: GeomKind::Curves,
            attributes: vec![attr("a,b", "string", GeometryScope::Constant)],
        });

        let (f, _, a) = render(&[file]);
        assert!(f.contains("\"/scenes/with, comma.abc\""));
        assert!(a.contains("\"a,b\""));

        // A CSV reader recovers the original fields
        let mut rdr = csv::Reader::from_reader(a.as_bytes());
        let record = rdr.records().next().unwrap().unwrap();
        assert_eq!(&record[2], "a,b");
        assert_eq!(&record[4], "kConstantScope");
    }

    #[test]
    fn test_file_without_objects_still_listed() {
        let file = FileRecord::new("/scenes/empty.abc");
        let (f, o, a) = render(&[file]);
        assert_eq!(f.lines().count(), 2);
        assert_eq!(o.lines().count(), 1);
        assert_eq!(a.lines().count(), 1);
    }
}
