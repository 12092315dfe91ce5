//! Walker tests over synthetic in-memory hierarchies.

use abc_scan::core::{
    CompoundPropertyReader, GeometryScope, MetaData, ObjectHeader, ObjectReader, PropertyHeader,
    PropertyReader,
};
use abc_scan::geom::GeomKind;
use abc_scan::scan::{walk_hierarchy, walk_properties, Attribute, FileRecord};
use abc_scan::util::DataType;

// ============================================================================
// Synthetic readers
// ============================================================================

#[derive(Clone)]
struct FakeProp {
    header: PropertyHeader,
    children: Vec<FakeProp>,
}

impl FakeProp {
    fn leaf(name: &str, data_type: DataType, meta: &str) -> Self {
        Self {
            header: PropertyHeader::scalar(name, data_type).with_meta_data(MetaData::parse(meta)),
            children: Vec::new(),
        }
    }

    fn compound(name: &str, children: Vec<FakeProp>) -> Self {
        Self {
            header: PropertyHeader::compound(name),
            children,
        }
    }
}

impl PropertyReader for FakeProp {
    fn header(&self) -> &PropertyHeader {
        &self.header
    }

    fn as_compound(&self) -> Option<&dyn CompoundPropertyReader> {
        if self.header.is_compound() {
            Some(self)
        } else {
            None
        }
    }
}

impl CompoundPropertyReader for FakeProp {
    fn num_properties(&self) -> usize {
        self.children.len()
    }

    fn property(&self, index: usize) -> Option<Box<dyn PropertyReader + '_>> {
        self.children
            .get(index)
            .map(|c| Box::new(c.clone()) as Box<dyn PropertyReader>)
    }
}

#[derive(Clone)]
struct FakeObject {
    header: ObjectHeader,
    props: Option<FakeProp>,
    children: Vec<FakeObject>,
    instance: bool,
}

impl FakeObject {
    fn new(name: &str, meta: &str) -> Self {
        Self {
            header: ObjectHeader::with_meta_data(name, format!("/{}", name), MetaData::parse(meta)),
            props: None,
            children: Vec::new(),
            instance: false,
        }
    }

    fn with_schema(name: &str, schema: &str) -> Self {
        Self::new(name, &format!("schema={}", schema))
    }

    fn props(mut self, props: FakeProp) -> Self {
        self.props = Some(props);
        self
    }

    fn child(mut self, child: FakeObject) -> Self {
        self.children.push(child);
        self
    }

    fn instance(mut self) -> Self {
        self.instance = true;
        self
    }
}

impl ObjectReader for FakeObject {
    fn header(&self) -> &ObjectHeader {
        &self.header
    }

    fn num_children(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<Box<dyn ObjectReader + '_>> {
        self.children
            .get(index)
            .map(|c| Box::new(c.clone()) as Box<dyn ObjectReader>)
    }

    fn properties(&self) -> Option<&dyn CompoundPropertyReader> {
        self.props.as_ref().map(|p| p as &dyn CompoundPropertyReader)
    }

    fn is_instance_root(&self) -> bool {
        self.instance
    }
}

fn scan(root: &FakeObject) -> FileRecord {
    let mut file = FileRecord::new("/scenes/test.abc");
    walk_hierarchy(&mut file, root);
    file
}

// ============================================================================
// Hierarchy walking
// ============================================================================

#[test]
fn records_objects_in_preorder() {
    let root = FakeObject::new("ABC", "")
        .child(
            FakeObject::with_schema("root_xform", "AbcGeom_Xform_v3")
                .child(FakeObject::with_schema("mesh", "AbcGeom_PolyMesh_v1"))
                .child(FakeObject::new("camera", "schema=AbcGeom_Camera_v1"))
                .child(FakeObject::with_schema("points", "AbcGeom_Points_v1")),
        )
        .child(FakeObject::with_schema("curves", "AbcGeom_Curve_v2"));

    let file = scan(&root);

    let kinds: Vec<GeomKind> = file.objects.iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        vec![
            GeomKind::Xform,
            GeomKind::PolyMesh,
            GeomKind::Points,
            GeomKind::Curves,
        ]
    );
    assert!(!file.has_instances);
}

#[test]
fn unmatched_objects_still_expose_children() {
    // The camera is skipped but the mesh below it is found
    let root = FakeObject::new("ABC", "").child(
        FakeObject::new("camera", "schema=AbcGeom_Camera_v1")
            .child(FakeObject::with_schema("mesh", "AbcGeom_PolyMesh_v1")),
    );

    let file = scan(&root);
    assert_eq!(file.objects.len(), 1);
    assert_eq!(file.objects[0].kind, GeomKind::PolyMesh);
}

#[test]
fn instance_root_sets_file_flag() {
    let root = FakeObject::new("ABC", "")
        .child(FakeObject::with_schema("mesh", "AbcGeom_PolyMesh_v1"))
        .child(FakeObject::new("mesh_inst", "isInstance=1").instance());

    let file = scan(&root);
    assert!(file.has_instances);
    assert_eq!(file.objects.len(), 1);
}

#[test]
fn instance_only_archive_has_no_objects() {
    let root = FakeObject::new("ABC", "").child(FakeObject::new("inst", "").instance());

    let file = scan(&root);
    assert!(file.has_instances);
    assert!(file.objects.is_empty());
}

#[test]
fn empty_hierarchy_yields_empty_record() {
    let file = scan(&FakeObject::new("ABC", ""));
    assert!(file.objects.is_empty());
    assert!(!file.has_instances);
}

// ============================================================================
// Property walking
// ============================================================================

#[test]
fn collects_attributes_across_nested_compounds() {
    let props = FakeProp::compound(
        ".prop",
        vec![
            FakeProp::leaf("width", DataType::FLOAT32, "geoScope=var"),
            FakeProp::compound(
                ".geom",
                vec![
                    FakeProp::leaf("N", DataType::VEC3F, "interpretation=normal;geoScope=fvr"),
                    FakeProp::compound(
                        ".arbGeomParams",
                        vec![FakeProp::leaf("Cd", DataType::VEC3F, "interpretation=rgb;geoScope=vtx")],
                    ),
                ],
            ),
            FakeProp::leaf("id", DataType::INT32, "geoScope=var"),
        ],
    );

    let mut attrs = Vec::new();
    walk_properties(&mut attrs, Some(&props));

    assert_eq!(
        attrs,
        vec![
            Attribute {
                name: "width".to_string(),
                type_name: "float32_t".to_string(),
                scope: GeometryScope::Varying,
            },
            Attribute {
                name: "N".to_string(),
                type_name: "float32_t[3]".to_string(),
                scope: GeometryScope::FaceVarying,
            },
            Attribute {
                name: "Cd".to_string(),
                type_name: "float32_t[3]".to_string(),
                scope: GeometryScope::Vertex,
            },
            Attribute {
                name: "id".to_string(),
                type_name: "int32_t".to_string(),
                scope: GeometryScope::Varying,
            },
        ]
    );
}

#[test]
fn unrecognized_leaves_are_skipped() {
    let props = FakeProp::compound(
        ".prop",
        vec![
            // vec3f without interpretation matches no parameter type
            FakeProp::leaf("P", DataType::VEC3F, "geoScope=vtx"),
            FakeProp::leaf("width", DataType::FLOAT32, "geoScope=var"),
        ],
    );

    let mut attrs = Vec::new();
    walk_properties(&mut attrs, Some(&props));

    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].name, "width");
}

#[test]
fn missing_namespace_collects_nothing() {
    let mut attrs = Vec::new();
    walk_properties(&mut attrs, None);
    assert!(attrs.is_empty());
}

#[test]
fn unknown_scope_attributes_are_kept() {
    let props = FakeProp::compound(
        ".prop",
        vec![FakeProp::leaf("width", DataType::FLOAT32, "")],
    );

    let mut attrs = Vec::new();
    walk_properties(&mut attrs, Some(&props));

    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].scope, GeometryScope::Unknown);
}

#[test]
fn object_attributes_come_from_its_own_properties() {
    let mesh = FakeObject::with_schema("mesh", "AbcGeom_PolyMesh_v1").props(FakeProp::compound(
        ".prop",
        vec![FakeProp::leaf("width", DataType::FLOAT32, "geoScope=var")],
    ));
    let root = FakeObject::new("ABC", "")
        .child(mesh)
        .child(FakeObject::with_schema("xform", "AbcGeom_Xform_v3"));

    let file = scan(&root);
    assert_eq!(file.objects.len(), 2);
    assert_eq!(file.objects[0].attributes.len(), 1);
    assert!(file.objects[1].attributes.is_empty());
}
