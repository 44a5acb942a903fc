//! Compiled-in page catalog: the remote base URL, the output directory and
//! the category/feature lists that drive a run.

/// Root of the Joos language pages on the course website.
pub const BASE_URL: &str = "https://student.cs.uwaterloo.ca/~cs444/joos/";

/// Output directory, relative to the working directory.
pub const OUTPUT_DIR: &str = "joos_features";

/// Top-level path segments on the remote site.
pub const CATEGORIES: &[&str] = &["features"];

/// Feature pages under each category, in fetch order.
pub const FEATURES: &[&str] = &[
    "compoundnames",
    "extends",
    "implements",
    "staticmethoddeclaration",
    "classimport",
    "packageimport",
    "package",
    "interfaces",
    "staticfielddeclaration",
    "externalcall",
    "implicitthisforfields",
    "implicitthisformethods",
    "accessstaticfield",
    "callstaticmethods",
    "nonthisfieldaccess",
    "methodoverloading",
    "arraylength",
    "publicclasses",
    "protectedfields",
    "publicconstructors",
    "publicmethods",
    "publicfields",
    "protectedmethods",
    "abstract",
    "finalclasses",
    "finalmethods",
    "protectedconstructors",
    "implicitsupercall",
    "fieldinitializers",
    "constructoroverloading",
    "nestedblocks",
    "arbitraryreturn",
    "omittedvoidreturn",
    "arbitrarylocaldeclaration",
    "if",
    "while",
    "for",
    "throws",
    "boolean",
    "int",
    "char",
    "byte",
    "short",
    "array",
    "array_return",
    "intliterals",
    "booleanliterals",
    "stringliterals",
    "nullliteral",
    "this",
    "charliterals",
    "characterescapes",
    "comment",
    "javadoc",
    "arithmeticoperations",
    "comparisonoperations",
    "eagerbooleanoperations",
    "implicitstringconcatenation",
    "lazybooleanoperations",
    "instanceof",
    "primitivecasts",
    "referencecasts",
    "widening",
];

/// One (category, feature) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef<'a> {
    pub category: &'a str,
    pub feature: &'a str,
}

/// Cartesian product of `categories` × `features`, categories outermost.
pub fn pairs<'a, C, F>(categories: &'a [C], features: &'a [F]) -> impl Iterator<Item = PageRef<'a>>
where
    C: AsRef<str>,
    F: AsRef<str>,
{
    categories.iter().flat_map(move |category| {
        features.iter().map(move |feature| PageRef {
            category: category.as_ref(),
            feature: feature.as_ref(),
        })
    })
}
