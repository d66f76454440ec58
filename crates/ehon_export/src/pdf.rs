//! PDF assembly from captured page rasters.
//!
//! Each raster becomes one document page whose media box matches the
//! raster geometry, with the JPEG embedded directly as a DCTDecode image
//! object rather than re-encoded.

use ehon_error::{EhonResult, ExportError, ExportErrorKind};
use ehon_interface::RasterPage;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

fn assembly_error(message: impl std::fmt::Display) -> ExportError {
    ExportError::new(ExportErrorKind::Assembly(message.to_string()))
}

/// Assemble captured rasters into a single PDF, one page per raster.
pub(crate) fn assemble(rasters: &[RasterPage]) -> EhonResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(rasters.len());

    for (index, raster) in rasters.iter().enumerate() {
        let image_name = format!("Im{index}");
        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => raster.width as i64,
                "Height" => raster.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            raster.jpeg.clone(),
        ));

        // Scale the unit image square to fill the page.
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        (raster.width as i64).into(),
                        0.into(),
                        0.into(),
                        (raster.height as i64).into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(image_name.clone().into_bytes())]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content.encode().map_err(assembly_error)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                (raster.width as i64).into(),
                (raster.height as i64).into(),
            ],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { image_name => image_id },
            },
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => rasters.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(assembly_error)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster() -> RasterPage {
        RasterPage {
            jpeg: vec![0xFF, 0xD8, 0xFF, 0xD9],
            width: 800,
            height: 600,
        }
    }

    #[test]
    fn one_document_page_per_raster() {
        let bytes = assemble(&[raster(), raster(), raster()]).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn output_is_a_pdf() {
        let bytes = assemble(&[raster()]).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }
}
