pub static ABOUT: &str = "Extract the composite image from a Paintstorm Studio document";

pub static LONG_ABOUT: &str = "This program extracts composite image from Paintstorm Studio document
and writes it as PPM image to standard output.
It can then be converted using imagemagick or netpbm in desired format.
   ***
 PSS format info:
* first 40 bytes of file is a software specific header,
* it is followed by RLE information block,
* after it is a RLE 24 bit RGB image array
   ***";

pub static AFTER_HELP: &str = "Example usage: pssthumb <file> > <output>.ppm
               pssthumb <file> | pnmtojpeg > <output>.jpg";

pub static MAX_DIMENSION_HELP: &str = "Maximum width or height to accept

Documents declaring larger dimensions are rejected before
any pixel memory is allocated. Values above 10000 have no effect";
